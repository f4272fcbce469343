use std::fmt::{Display, Formatter, Result};
use std::path::PathBuf;

use crate::tasks::TaskKind;

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskReport {
    pub kind: TaskKind,
    pub output: PathBuf,
    pub summary: String,
    pub exported: Option<PathBuf>,
}

impl Display for TaskReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.summary)
    }
}
