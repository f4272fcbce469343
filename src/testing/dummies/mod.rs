mod fixtures;

pub use fixtures::{alternating_trials, small_config};
