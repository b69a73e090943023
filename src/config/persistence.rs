//! File persistence configuration

// App state persistence
/// Path for saving/loading application UI state (slider position, panel toggles).
/// Simulation results are never written here.
pub const APP_STATE_PATH: &str = ".states.json";
