use rayon::prelude::*;

use crate::config::SIMULATION;
use crate::models::{EstimateResult, SampleSet};

use super::sampler::{PointSampler, UniformSquare};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Run one simulation with `n` points drawn from the thread RNG.
pub fn simulate(n: usize) -> (SampleSet, EstimateResult) {
    simulate_with(n, UniformSquare::new(rand::thread_rng()))
}

/// Run one simulation with `n` points drawn from `sampler`.
///
/// `n == 0` is valid and yields an empty set with a 0.0 estimate.
pub fn simulate_with<S: PointSampler>(n: usize, mut sampler: S) -> (SampleSet, EstimateResult) {
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    for _ in 0..n {
        let [x, y] = sampler.sample_point();
        xs.push(x);
        ys.push(y);
    }

    let inside = classify(&xs, &ys);
    let points_inside = inside.iter().filter(|&&flag| flag).count();
    let estimate = EstimateResult::from_counts(points_inside, n);

    (SampleSet::new(xs, ys, inside), estimate)
}

/// Elementwise `x² + y² <= 1` over parallel coordinate slices.
///
/// Large inputs run on the rayon pool; the output order matches the input
/// either way.
pub fn classify(xs: &[f64], ys: &[f64]) -> Vec<bool> {
    debug_assert_eq!(xs.len(), ys.len());

    let parallel = xs.len() >= SIMULATION.parallel_classify_threshold;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_classification_path {
        log::info!(
            "Classifying {} points ({})",
            xs.len(),
            if parallel { "rayon" } else { "sequential" }
        );
    }

    if parallel {
        xs.par_iter()
            .zip(ys.par_iter())
            .map(|(&x, &y)| in_unit_disk(x, y))
            .collect()
    } else {
        xs.iter()
            .zip(ys)
            .map(|(&x, &y)| in_unit_disk(x, y))
            .collect()
    }
}

#[inline]
fn in_unit_disk(x: f64, y: f64) -> bool {
    x * x + y * y <= 1.0
}
