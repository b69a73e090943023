use rand::Rng;
use rand::distributions::{Distribution, Uniform};

/// Source of points in the square [-1, 1] x [-1, 1].
///
/// The estimator only ever talks to this trait, so a run can be driven by the
/// thread RNG, a seeded RNG, or a fixed script.
pub trait PointSampler {
    fn sample_point(&mut self) -> [f64; 2];
}

/// Independent uniform draws for x and y on the closed interval [-1, 1].
pub struct UniformSquare<R: Rng> {
    rng: R,
    range: Uniform<f64>,
}

impl<R: Rng> UniformSquare<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            range: Uniform::new_inclusive(-1.0, 1.0),
        }
    }
}

impl<R: Rng> PointSampler for UniformSquare<R> {
    fn sample_point(&mut self) -> [f64; 2] {
        let x = self.range.sample(&mut self.rng);
        let y = self.range.sample(&mut self.rng);
        [x, y]
    }
}

/// Replays a fixed list of points, wrapping around once exhausted.
/// An empty script yields the origin.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPoints {
    points: Vec<[f64; 2]>,
    cursor: usize,
}

impl ScriptedPoints {
    pub fn new(points: Vec<[f64; 2]>) -> Self {
        Self { points, cursor: 0 }
    }
}

impl PointSampler for ScriptedPoints {
    fn sample_point(&mut self) -> [f64; 2] {
        if self.points.is_empty() {
            return [0.0, 0.0];
        }
        let point = self.points[self.cursor];
        self.cursor = (self.cursor + 1) % self.points.len();
        point
    }
}

impl<S: PointSampler + ?Sized> PointSampler for &mut S {
    fn sample_point(&mut self) -> [f64; 2] {
        (**self).sample_point()
    }
}
