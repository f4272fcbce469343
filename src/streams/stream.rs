use crate::core::TrialSequence;

/// Pull-based source of binary trial outcomes.
///
/// Implementations may be finite or unbounded. A generator seeded with the
/// same value must yield the same outcomes after [`restart`](TrialStream::restart).
pub trait TrialStream {
    /// Indicates whether the stream *may* produce more outcomes.
    ///
    /// If it returns `false`, a subsequent call to
    /// [`next_trial`](TrialStream::next_trial) must return `None`.
    fn has_more_trials(&self) -> bool;

    /// Produces the next outcome, or `None` if the stream is exhausted.
    fn next_trial(&mut self) -> Option<bool>;

    /// Resets the stream to its initial state.
    fn restart(&mut self);

    /// Drains up to `n` outcomes into an immutable sequence.
    fn take_sequence(&mut self, n: usize) -> TrialSequence {
        let mut outcomes = Vec::with_capacity(n);
        while outcomes.len() < n {
            let Some(o) = self.next_trial() else {
                break;
            };
            outcomes.push(o);
        }
        TrialSequence::new(outcomes)
    }
}
