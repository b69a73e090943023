use std::f64::consts::PI;
use std::time::{Duration, Instant};

use crate::config::SIMULATION;
use crate::models::{EstimateResult, SampleSet};
use crate::render::{PlotImage, render};
use crate::simulation::{PointSampler, simulate_with};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::utils::{format_count, format_elapsed, format_fixed};

use super::app::PiEstimatorApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Everything the display layer keeps from the most recent trigger.
/// Replaced wholesale on every run; the core never reads it back.
#[derive(Debug, Clone)]
pub struct LastRun {
    pub samples: SampleSet,
    pub estimate: EstimateResult,
    pub image: PlotImage,
    pub elapsed: Duration,
}

impl LastRun {
    /// Sample, estimate and render `n` points in one go.
    pub fn execute<S: PointSampler>(n: usize, sampler: S) -> Self {
        let start = Instant::now();
        let (samples, estimate) = simulate_with(n, sampler);
        let image = render(&samples, &estimate);
        let elapsed = start.elapsed();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_simulation_runs {
            log::info!(
                "Run complete: N={} inside={} estimate={:.8} in {}",
                estimate.points_total,
                estimate.points_inside,
                estimate.pi_estimate,
                format_elapsed(elapsed)
            );
        }

        Self {
            samples,
            estimate,
            image,
            elapsed,
        }
    }

    /// Label/value rows for the results panel and the headless text output.
    pub fn result_rows(&self) -> Vec<(&'static str, String)> {
        result_rows(&self.estimate, Some(self.elapsed))
    }
}

/// Results summary: counts, estimate vs. true π, difference, spread.
pub fn result_rows(
    estimate: &EstimateResult,
    elapsed: Option<Duration>,
) -> Vec<(&'static str, String)> {
    let decimals = UI_CONFIG.result_decimals;
    let mut rows = vec![
        (UI_TEXT.label_total_points, format_count(estimate.points_total)),
        (UI_TEXT.label_points_inside, format_count(estimate.points_inside)),
        (UI_TEXT.label_estimate, format_fixed(estimate.pi_estimate, decimals)),
        (UI_TEXT.label_actual, format_fixed(PI, decimals)),
        (UI_TEXT.label_difference, format_fixed(estimate.absolute_error(), decimals)),
    ];

    if let Some(se) = estimate.standard_error() {
        rows.push((UI_TEXT.label_standard_error, format_fixed(se, decimals)));
    }
    if let Some((lo, hi)) = estimate.confidence_interval(SIMULATION.confidence_level) {
        rows.push((
            UI_TEXT.label_confidence_interval,
            format!("[{}, {}]", format_fixed(lo, decimals), format_fixed(hi, decimals)),
        ));
    }
    if let Some(elapsed) = elapsed {
        rows.push((UI_TEXT.label_elapsed, format_elapsed(elapsed)));
    }
    rows
}

impl PiEstimatorApp {
    /// Number of points the slider currently selects.
    pub(super) fn point_count(&self) -> usize {
        SIMULATION.points_for_exponent(self.exponent)
    }

    /// Handle the run button: simulate with the thread RNG and replace the
    /// previous result.
    pub(super) fn run_simulation(&mut self) {
        let n = self.point_count();
        let sampler = crate::simulation::UniformSquare::new(rand::thread_rng());
        self.last_run = Some(LastRun::execute(n, sampler));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ScriptedPoints;

    #[test]
    fn execute_keeps_samples_estimate_and_image_in_step() {
        let script = ScriptedPoints::new(vec![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.1, 0.1]]);
        let run = LastRun::execute(4, script);

        assert_eq!(run.samples.len(), 4);
        assert_eq!(run.estimate.points_inside, 3);
        assert!(run.image.annotation.is_some());
        assert_eq!(run.image.series[0].points.len(), 3);
        assert_eq!(run.image.series[1].points.len(), 1);
    }

    #[test]
    fn result_rows_show_eight_decimals_and_difference() {
        let estimate = EstimateResult::from_counts(3, 4);
        let rows = result_rows(&estimate, None);

        assert_eq!(rows[0], (UI_TEXT.label_total_points, "4".to_string()));
        assert_eq!(rows[1], (UI_TEXT.label_points_inside, "3".to_string()));
        assert_eq!(rows[2], (UI_TEXT.label_estimate, "3.00000000".to_string()));
        assert_eq!(rows[3], (UI_TEXT.label_actual, "3.14159265".to_string()));
        assert_eq!(rows[4], (UI_TEXT.label_difference, "0.14159265".to_string()));
        assert!(rows.iter().any(|(label, _)| *label == UI_TEXT.label_confidence_interval));
        assert!(!rows.iter().any(|(label, _)| *label == UI_TEXT.label_elapsed));
    }

    #[test]
    fn empty_run_rows_skip_spread() {
        let estimate = EstimateResult::from_counts(0, 0);
        let rows = result_rows(&estimate, Some(Duration::from_micros(5)));

        assert_eq!(rows[2].1, "0.00000000");
        assert!(!rows.iter().any(|(label, _)| *label == UI_TEXT.label_standard_error));
        assert!(!rows.iter().any(|(label, _)| *label == UI_TEXT.label_confidence_interval));
        assert_eq!(rows.last().map(|(label, _)| *label), Some(UI_TEXT.label_elapsed));
    }
}
