use std::fmt::{Display, Formatter, Result};

/// Immutable, ordered sequence of binary trial outcomes.
///
/// Generated once per run and then only read, usually through growing
/// [`prefix`](TrialSequence::prefix) views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialSequence {
    outcomes: Vec<bool>,
}

impl TrialSequence {
    pub fn new(outcomes: Vec<bool>) -> Self {
        Self { outcomes }
    }

    /// Builds a sequence from 0/1 values; anything non-zero counts as a success.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self::new(bits.iter().map(|&b| b != 0).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    #[inline]
    pub fn outcomes(&self) -> &[bool] {
        &self.outcomes
    }

    /// First `k` outcomes. `k` larger than the sequence yields the whole sequence.
    #[inline]
    pub fn prefix(&self, k: usize) -> &[bool] {
        &self.outcomes[..k.min(self.outcomes.len())]
    }

    pub fn successes(&self) -> usize {
        count_successes(&self.outcomes)
    }

    pub fn failures(&self) -> usize {
        self.len() - self.successes()
    }

    /// Fraction of successes, `NaN` when empty.
    pub fn sample_mean(&self) -> f64 {
        sample_mean(&self.outcomes)
    }
}

impl From<Vec<bool>> for TrialSequence {
    fn from(outcomes: Vec<bool>) -> Self {
        Self::new(outcomes)
    }
}

impl Display for TrialSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "trials={}, successes={}, rate={:.4}",
            self.len(),
            self.successes(),
            self.sample_mean()
        )
    }
}

#[inline]
pub(crate) fn count_successes(outcomes: &[bool]) -> usize {
    outcomes.iter().filter(|&&o| o).count()
}

pub(crate) fn sample_mean(outcomes: &[bool]) -> f64 {
    if outcomes.is_empty() {
        f64::NAN
    } else {
        count_successes(outcomes) as f64 / outcomes.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_mean() {
        let t = TrialSequence::from_bits(&[1, 0, 1, 1, 0]);
        assert_eq!(t.len(), 5);
        assert_eq!(t.successes(), 3);
        assert_eq!(t.failures(), 2);
        assert!((t.sample_mean() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn empty_sequence_has_nan_mean() {
        let t = TrialSequence::default();
        assert!(t.is_empty());
        assert_eq!(t.successes(), 0);
        assert!(t.sample_mean().is_nan());
    }

    #[test]
    fn prefix_is_clamped() {
        let t = TrialSequence::from_bits(&[1, 1, 0]);
        assert_eq!(t.prefix(0), &[] as &[bool]);
        assert_eq!(t.prefix(2), &[true, true]);
        assert_eq!(t.prefix(10).len(), 3);
    }

    #[test]
    fn display_summarises() {
        let t = TrialSequence::from_bits(&[1, 0]);
        assert_eq!(t.to_string(), "trials=2, successes=1, rate=0.5000");
    }
}
