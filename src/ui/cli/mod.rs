pub mod args;
pub mod drivers;
pub mod schema;
pub mod wizard;

pub use args::{Cli, Command, CurveArgs};
