use tracing::debug;

use crate::core::TrialSequence;
use crate::estimators::{EstimateError, RateEstimator};
use crate::evaluation::{CurvePoint, LearningCurve};

/// Prefix lengths plotted in the posterior panel grid.
const PANEL_TAIL: [usize; 4] = [50, 75, 100, 110];

/// `start, start + step, ...` strictly below `end`. Empty when `step == 0`.
pub fn prefix_lengths(start: usize, end: usize, step: usize) -> Vec<usize> {
    if step == 0 {
        return Vec::new();
    }
    (start..end).step_by(step).collect()
}

/// `0, 3, ..., 33` followed by `50, 75, 100, 110`.
pub fn panel_prefix_lengths() -> Vec<usize> {
    let mut lengths = prefix_lengths(0, 36, 3);
    lengths.extend(PANEL_TAIL);
    lengths
}

/// Applies `estimator` to each prefix of `trials` named in `lengths`.
pub fn learning_curve<E>(
    trials: &TrialSequence,
    lengths: &[usize],
    estimator: &mut E,
) -> Result<LearningCurve, EstimateError>
where
    E: RateEstimator + ?Sized,
{
    let mut curve = LearningCurve::default();
    for &k in lengths {
        let prefix = trials.prefix(k);
        let point = CurvePoint::new(prefix.len(), estimator.estimate(prefix)?);
        debug!(estimator = estimator.name(), %point, "curve point");
        curve.push(point);
    }
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::{BetaPosterior, Bootstrap};
    use crate::testing::alternating_trials;

    #[test]
    fn prefix_lengths_match_arange() {
        let n = prefix_lengths(1, 150, 4);
        assert_eq!(n.len(), 38);
        assert_eq!(n.first(), Some(&1));
        assert_eq!(n.last(), Some(&149));
        assert_eq!(prefix_lengths(0, 10, 3), vec![0, 3, 6, 9]);
        assert!(prefix_lengths(5, 5, 1).is_empty());
        assert!(prefix_lengths(0, 10, 0).is_empty());
    }

    #[test]
    fn panel_lengths_are_fixed() {
        assert_eq!(
            panel_prefix_lengths(),
            vec![0, 3, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 50, 75, 100, 110]
        );
    }

    #[test]
    fn one_point_per_prefix() {
        let trials = alternating_trials(20);
        let lengths = prefix_lengths(1, 20, 4);
        let curve = learning_curve(&trials, &lengths, &mut BetaPosterior::default()).unwrap();
        assert_eq!(curve.len(), lengths.len());
        let seen: Vec<usize> = curve.points().iter().map(|p| p.trials).collect();
        assert_eq!(seen, lengths);
    }

    #[test]
    fn points_match_direct_estimates() {
        let trials = alternating_trials(12);
        let bp = BetaPosterior::default();
        let curve = learning_curve(&trials, &[4, 12], &mut bp.clone()).unwrap();
        assert_eq!(curve.points()[0].estimate(), bp.posterior(trials.prefix(4)));
        assert_eq!(curve.latest().unwrap().estimate(), bp.posterior(trials.outcomes()));
    }

    #[test]
    fn bootstrap_error_on_empty_prefix_propagates() {
        let trials = alternating_trials(8);
        let mut bs = Bootstrap::new(10, 1).unwrap();
        let err = learning_curve(&trials, &[0, 4], &mut bs).unwrap_err();
        assert_eq!(err, EstimateError::EmptySample);
    }

    #[test]
    fn works_through_a_trait_object() {
        let trials = alternating_trials(10);
        let mut boxed: Box<dyn RateEstimator> = Box::new(Bootstrap::new(100, 3).unwrap());
        let curve = learning_curve(&trials, &[2, 10], boxed.as_mut()).unwrap();
        let last = curve.latest().unwrap();
        assert_eq!(last.trials, 10);
        assert!(last.std_dev > 0.0);
        assert!((last.mean - 0.5).abs() < 0.1);
    }

    #[test]
    fn lengths_beyond_sequence_are_clamped() {
        let trials = alternating_trials(6);
        let curve = learning_curve(&trials, &[10], &mut BetaPosterior::default()).unwrap();
        assert_eq!(curve.latest().unwrap().trials, 6);
    }
}
