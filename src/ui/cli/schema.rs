use anyhow::{Context, Result, anyhow};
use schemars::Schema;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: FieldKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Prompt specs for the named top-level properties of a struct schema, in the
/// order given.
pub fn field_specs(root: &Schema, names: &[&str]) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;
    let props = root_obj
        .get("properties")
        .and_then(|v| v.as_object())
        .context("schema has no properties")?;

    names
        .iter()
        .map(|&name| {
            let fs_obj = props
                .get(name)
                .and_then(|v| v.as_object())
                .ok_or_else(|| anyhow!("no property '{name}' in schema"))?;
            field_spec(name, fs_obj)
        })
        .collect()
}

fn field_spec(name: &str, fs_obj: &Map<String, Value>) -> Result<FieldSpec> {
    let title = fs_obj
        .get("title")
        .and_then(|v| v.as_str())
        .unwrap_or(name)
        .to_string();

    let description = fs_obj
        .get("description")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let kind = detect_field_kind(fs_obj.get("type"))
        .ok_or_else(|| anyhow!("unsupported type for '{name}'"))?;

    let min = fs_obj
        .get("minimum")
        .or_else(|| fs_obj.get("exclusiveMinimum"))
        .and_then(|v| v.as_f64());

    let max = fs_obj
        .get("maximum")
        .or_else(|| fs_obj.get("exclusiveMaximum"))
        .and_then(|v| v.as_f64());

    Ok(FieldSpec {
        name: name.to_string(),
        title,
        description,
        kind,
        min,
        max,
    })
}

fn kind_of(s: &str) -> Option<FieldKind> {
    match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        _ => None,
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    match ty {
        Some(Value::String(s)) => kind_of(s),
        // unions like ["integer","null"] for Option<T>
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).find_map(kind_of),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExperimentConfig;
    use schemars::schema_for;
    use serde_json::json;

    #[test]
    fn reads_config_fields_in_requested_order() {
        let schema = schema_for!(ExperimentConfig);
        let specs = field_specs(&schema, &["true_rate", "trials", "seed"]).unwrap();

        assert_eq!(specs[0].name, "true_rate");
        assert_eq!(specs[0].title, "True Rate");
        assert_eq!(specs[0].kind, FieldKind::Number);
        assert_eq!(specs[0].min, Some(0.0));
        assert_eq!(specs[0].max, Some(1.0));

        assert_eq!(specs[1].kind, FieldKind::Integer);
        assert_eq!(specs[1].min, Some(1.0));
        assert_eq!(specs[2].title, "Seed");
    }

    #[test]
    fn optional_fields_resolve_to_inner_kind() {
        let schema = schema_for!(ExperimentConfig);
        let specs = field_specs(&schema, &["bootstrap_sample_size"]).unwrap();
        assert_eq!(specs[0].kind, FieldKind::Integer);
    }

    #[test]
    fn unknown_field_is_an_error() {
        let schema = schema_for!(ExperimentConfig);
        assert!(field_specs(&schema, &["nope"]).is_err());
    }

    #[test]
    fn detects_union_types() {
        assert_eq!(detect_field_kind(Some(&json!(["null", "number"]))), Some(FieldKind::Number));
        assert_eq!(detect_field_kind(Some(&json!("string"))), Some(FieldKind::String));
        assert_eq!(detect_field_kind(Some(&json!("boolean"))), None);
        assert_eq!(detect_field_kind(Some(&json!("array"))), None);
        assert_eq!(detect_field_kind(None), None);
    }
}
