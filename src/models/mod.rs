// Data produced by a single simulation run
pub mod estimate;
pub mod sample_set;

// Re-export commonly used types
pub use estimate::EstimateResult;
pub use sample_set::SampleSet;
