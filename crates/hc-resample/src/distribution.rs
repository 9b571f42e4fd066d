use crate::types::ResampleError;

/// The empirical forecast distribution produced by a simulation run.
///
/// Outcomes are sorted ascending at construction and immutable thereafter;
/// the distribution exists only to answer quantile queries.
#[derive(Clone, Debug, PartialEq)]
pub struct OutcomeDistribution {
    /// Sorted ascending.
    outcomes: Vec<f64>,
}

impl OutcomeDistribution {
    pub fn new(mut outcomes: Vec<f64>) -> Result<Self, ResampleError> {
        if outcomes.is_empty() {
            return Err(ResampleError::EmptyDistribution);
        }
        outcomes.sort_by(f64::total_cmp);
        Ok(Self { outcomes })
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// All outcomes, ascending.
    pub fn outcomes(&self) -> &[f64] {
        &self.outcomes
    }

    pub fn min(&self) -> f64 {
        self.outcomes[0]
    }

    pub fn max(&self) -> f64 {
        self.outcomes[self.outcomes.len() - 1]
    }

    /// Linear-interpolation quantile for `q` in `[0, 1]`.
    ///
    /// Rank `q * (n - 1)` interpolated between the bracketing sorted
    /// outcomes. `quantile(0)` is the minimum, `quantile(1)` the maximum,
    /// and the result is monotonic non-decreasing in `q`.
    pub fn quantile(&self, q: f64) -> Result<f64, ResampleError> {
        if !(0.0..=1.0).contains(&q) || q.is_nan() {
            return Err(ResampleError::QuantileOutOfRange { q });
        }
        let n = self.outcomes.len();
        if n == 1 {
            return Ok(self.outcomes[0]);
        }

        let rank = q * (n - 1) as f64;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        if lo == hi {
            return Ok(self.outcomes[lo]);
        }
        let weight = rank - lo as f64;
        Ok(self.outcomes[lo] * (1.0 - weight) + self.outcomes[hi] * weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert_eq!(
            OutcomeDistribution::new(vec![]),
            Err(ResampleError::EmptyDistribution)
        );
    }

    #[test]
    fn quantile_endpoints_are_min_and_max() {
        let d = OutcomeDistribution::new(vec![3.0, 1.0, 2.0]).unwrap();
        assert_eq!(d.quantile(0.0).unwrap(), 1.0);
        assert_eq!(d.quantile(1.0).unwrap(), 3.0);
        assert_eq!(d.min(), 1.0);
        assert_eq!(d.max(), 3.0);
    }

    #[test]
    fn median_interpolates() {
        let d = OutcomeDistribution::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(d.quantile(0.5).unwrap(), 2.5);
    }

    #[test]
    fn quantile_is_monotonic_in_q() {
        let d = OutcomeDistribution::new(vec![5.0, -2.0, 0.5, 9.0, 3.3]).unwrap();
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=100 {
            let q = f64::from(i) / 100.0;
            let v = d.quantile(q).unwrap();
            assert!(v >= prev, "quantile({q}) = {v} dipped below {prev}");
            prev = v;
        }
    }

    #[test]
    fn out_of_range_q_is_a_domain_error() {
        let d = OutcomeDistribution::new(vec![1.0]).unwrap();
        assert_eq!(
            d.quantile(-0.01),
            Err(ResampleError::QuantileOutOfRange { q: -0.01 })
        );
        assert_eq!(
            d.quantile(1.5),
            Err(ResampleError::QuantileOutOfRange { q: 1.5 })
        );
        assert!(d.quantile(f64::NAN).is_err());
    }

    #[test]
    fn singleton_distribution_is_constant() {
        let d = OutcomeDistribution::new(vec![42.0]).unwrap();
        for q in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(d.quantile(q).unwrap(), 42.0);
        }
    }
}
