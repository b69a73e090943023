//! Monte Carlo sampling and π estimation.

pub mod estimator;
pub mod sampler;

pub use estimator::{classify, simulate, simulate_with};
pub use sampler::{PointSampler, ScriptedPoints, UniformSquare};
