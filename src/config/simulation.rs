//! Simulation controls configuration

/// Bounds and defaults for the point-count control plus tuning for the
/// classification pass.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Smallest slider exponent (10^min points)
    pub min_exponent: u32,
    /// Largest slider exponent (10^max points)
    pub max_exponent: u32,
    /// Slider exponent selected on first launch
    pub default_exponent: u32,
    /// Runs with at least this many points classify on the rayon pool
    pub parallel_classify_threshold: usize,
    /// Confidence level reported next to the estimate
    pub confidence_level: f64,
}

impl SimulationConfig {
    /// Point count for a slider exponent, clamped into the configured range.
    pub fn points_for_exponent(&self, exponent: u32) -> usize {
        10usize.pow(exponent.clamp(self.min_exponent, self.max_exponent))
    }
}

pub const SIMULATION: SimulationConfig = SimulationConfig {
    min_exponent: 1,
    max_exponent: 6,
    default_exponent: 3,
    parallel_classify_threshold: 100_000,
    confidence_level: 0.95,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_maps_to_power_of_ten() {
        assert_eq!(SIMULATION.points_for_exponent(1), 10);
        assert_eq!(SIMULATION.points_for_exponent(3), 1_000);
        assert_eq!(SIMULATION.points_for_exponent(6), 1_000_000);
    }

    #[test]
    fn exponent_outside_range_is_clamped() {
        assert_eq!(SIMULATION.points_for_exponent(0), 10);
        assert_eq!(SIMULATION.points_for_exponent(9), 1_000_000);
    }
}
