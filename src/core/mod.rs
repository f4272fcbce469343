mod trials;

pub use trials::TrialSequence;
pub(crate) use trials::{count_successes, sample_mean};
