pub mod dummies;
pub mod stubs;

pub use dummies::{alternating_trials, small_config};
pub use stubs::ScriptedDriver;
