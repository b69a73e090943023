//! Configuration module for the π estimator.

mod debug; // Private: files go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;
pub mod simulation;

// Re-export commonly used items
pub use persistence::APP_STATE_PATH;
pub use plot::PLOT_CONFIG;
pub use simulation::{SIMULATION, SimulationConfig};
