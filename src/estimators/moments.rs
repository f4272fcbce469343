use crate::estimators::{Estimate, Estimator};

/// Streaming mean and population standard deviation (Welford).
///
/// `NaN` observations are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct MomentsEstimator {
    len: f64,
    mean: f64,
    m2: f64,
}

impl MomentsEstimator {
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0.0
    }

    /// Population variance (divides by `n`), `NaN` when empty.
    #[inline]
    pub fn variance(&self) -> f64 {
        if self.len > 0.0 {
            self.m2 / self.len
        } else {
            f64::NAN
        }
    }

    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn summary(&self) -> Estimate {
        Estimate::new(self.estimation(), self.std_dev())
    }
}

impl Estimator for MomentsEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1.0;
        let delta = v - self.mean;
        self.mean += delta / self.len;
        self.m2 += delta * (v - self.mean);
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0.0 { self.mean } else { f64::NAN }
    }
}

impl FromIterator<f64> for MomentsEstimator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut m = Self::default();
        for v in iter {
            m.add(v);
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_nan() {
        let m = MomentsEstimator::default();
        assert!(m.is_empty());
        assert!(m.estimation().is_nan());
        assert!(m.std_dev().is_nan());
    }

    #[test]
    fn matches_population_moments() {
        let m: MomentsEstimator = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
        assert_eq!(m.len(), 8);
        assert!((m.estimation() - 5.0).abs() < 1e-12);
        assert!((m.std_dev() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn nan_is_ignored() {
        let m: MomentsEstimator = [1.0, f64::NAN, 3.0].into_iter().collect();
        assert_eq!(m.len(), 2);
        assert!((m.estimation() - 2.0).abs() < 1e-12);
        assert!((m.variance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_value_has_zero_spread() {
        let m: MomentsEstimator = [0.42].into_iter().collect();
        assert_eq!(m.summary(), Estimate::new(0.42, 0.0));
    }
}
