mod driver;
mod histogram;
mod preview;

pub use driver::{learning_curve, panel_prefix_lengths, prefix_lengths};
pub use histogram::{Histogram, HistogramError, linspace};
pub use preview::{CurveFormat, CurvePoint, LearningCurve};
