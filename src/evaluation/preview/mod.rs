mod curve_point;
mod learning_curve;

pub use curve_point::CurvePoint;
pub use learning_curve::{CurveFormat, LearningCurve};
