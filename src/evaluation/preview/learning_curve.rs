use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::evaluation::CurvePoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CurveFormat {
    Csv,
    Tsv,
    Json,
}

impl CurveFormat {
    pub fn extension(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LearningCurve {
    entries: Vec<CurvePoint>,
}

impl LearningCurve {
    pub fn push(&mut self, point: CurvePoint) {
        self.entries.push(point)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn latest(&self) -> Option<CurvePoint> {
        self.entries.last().copied()
    }
    pub fn points(&self) -> &[CurvePoint] {
        &self.entries
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), Error> {
        match fmt {
            CurveFormat::Csv => self.export_with_delimiter(path, ','),
            CurveFormat::Tsv => self.export_with_delimiter(path, '\t'),
            CurveFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "trials{d}mean{d}std_dev", d = delimiter)?;
        for p in &self.entries {
            writeln!(
                w,
                "{}{d}{:.12}{d}{:.12}",
                p.trials,
                p.mean,
                p.std_dev,
                d = delimiter
            )?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &self.entries)?;
        writeln!(w)?;
        w.flush()
    }
}

impl FromIterator<CurvePoint> for LearningCurve {
    fn from_iter<I: IntoIterator<Item = CurvePoint>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
