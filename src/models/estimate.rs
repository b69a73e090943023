use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

/// Scalar outcome of a run. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimateResult {
    pub points_inside: usize,
    pub points_total: usize,
    /// 4 * inside / total, or 0.0 for an empty run.
    pub pi_estimate: f64,
}

impl EstimateResult {
    /// Build the result from raw counts. An empty run yields a 0.0 estimate
    /// rather than dividing by zero.
    pub fn from_counts(points_inside: usize, points_total: usize) -> Self {
        debug_assert!(points_inside <= points_total);
        let pi_estimate = if points_total > 0 {
            4.0 * points_inside as f64 / points_total as f64
        } else {
            0.0
        };
        Self {
            points_inside,
            points_total,
            pi_estimate,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points_total == 0
    }

    /// Fraction of points that landed in the unit disk.
    pub fn inside_ratio(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.points_inside as f64 / self.points_total as f64)
    }

    /// |estimate - π|
    pub fn absolute_error(&self) -> f64 {
        (self.pi_estimate - PI).abs()
    }

    /// Standard error of the estimate, treating each point as a Bernoulli trial.
    pub fn standard_error(&self) -> Option<f64> {
        let p = self.inside_ratio()?;
        Some(4.0 * (p * (1.0 - p) / self.points_total as f64).sqrt())
    }

    /// Two-sided normal-approximation interval around the estimate.
    /// `level` must lie strictly between 0 and 1.
    pub fn confidence_interval(&self, level: f64) -> Option<(f64, f64)> {
        if !(level > 0.0 && level < 1.0) {
            return None;
        }
        let se = self.standard_error()?;
        let normal = Normal::new(0.0, 1.0).ok()?;
        let z = normal.inverse_cdf(0.5 + level / 2.0);
        Some((self.pi_estimate - z * se, self.pi_estimate + z * se))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_run_uses_zero_sentinel() {
        let result = EstimateResult::from_counts(0, 0);
        assert_eq!(result.pi_estimate, 0.0);
        assert!(result.is_empty());
        assert_eq!(result.standard_error(), None);
        assert_eq!(result.confidence_interval(0.95), None);
        assert!(approx_eq(result.absolute_error(), PI));
    }

    #[test]
    fn estimate_is_four_times_ratio() {
        let result = EstimateResult::from_counts(3, 4);
        assert!(approx_eq(result.pi_estimate, 3.0));
        assert!(approx_eq(result.inside_ratio().unwrap(), 0.75));
    }

    #[test]
    fn standard_error_matches_bernoulli_formula() {
        let result = EstimateResult::from_counts(785, 1_000);
        let p: f64 = 0.785;
        let expected = 4.0 * (p * (1.0 - p) / 1_000.0).sqrt();
        assert!(approx_eq(result.standard_error().unwrap(), expected));
    }

    #[test]
    fn confidence_interval_brackets_estimate() {
        let result = EstimateResult::from_counts(785, 1_000);
        let (lo, hi) = result.confidence_interval(0.95).unwrap();
        let se = result.standard_error().unwrap();

        assert!(lo < result.pi_estimate && result.pi_estimate < hi);
        // z for 95% two-sided is ~1.95996
        assert!(((hi - result.pi_estimate) / se - 1.959_964).abs() < 1e-4);
        assert!(approx_eq(result.pi_estimate - lo, hi - result.pi_estimate));
    }

    #[test]
    fn confidence_interval_rejects_bad_level() {
        let result = EstimateResult::from_counts(785, 1_000);
        assert_eq!(result.confidence_interval(0.0), None);
        assert_eq!(result.confidence_interval(1.0), None);
        assert_eq!(result.confidence_interval(f64::NAN), None);
    }

    #[test]
    fn all_inside_has_zero_spread() {
        let result = EstimateResult::from_counts(10, 10);
        assert!(approx_eq(result.pi_estimate, 4.0));
        assert!(approx_eq(result.standard_error().unwrap(), 0.0));
    }

    #[test]
    fn serializes_to_json() {
        let result = EstimateResult::from_counts(3, 4);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"points_inside\":3"));
        assert!(json.contains("\"points_total\":4"));
        assert!(json.contains("\"pi_estimate\":3.0"));
    }
}
