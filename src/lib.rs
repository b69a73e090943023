#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod models;
pub mod render;
pub mod simulation;
pub mod utils;

// Outer surfaces
pub mod headless;
pub mod ui;

// Re-export commonly used types
pub use models::{EstimateResult, SampleSet};
pub use render::{PlotImage, render, to_svg};
pub use simulation::{PointSampler, ScriptedPoints, UniformSquare, simulate, simulate_with};
pub use ui::PiEstimatorApp;

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

use crate::config::SIMULATION;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run a single simulation in the terminal instead of opening the window
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    /// Point count as a power of ten (10^EXPONENT points)
    #[arg(long, default_value_t = SIMULATION.default_exponent, value_parser = clap::value_parser!(u32).range(1..=6))]
    pub exponent: u32,

    /// Exact point count; overrides --exponent and accepts any non-negative integer
    #[arg(long)]
    pub points: Option<usize>,

    /// Seed the sampler for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Write the rendered plot to this SVG file
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Side length of the SVG plot area in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(100..=4000))]
    pub svg_size: u32,
}

impl Cli {
    /// Number of points requested on the command line.
    pub fn point_count(&self) -> usize {
        self.points
            .unwrap_or_else(|| SIMULATION.points_for_exponent(self.exponent))
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext) -> Box<dyn eframe::App> {
    Box::new(ui::PiEstimatorApp::new(cc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_thousand_points() {
        let cli = Cli::parse_from(["pi-estimator"]);
        assert!(!cli.headless);
        assert_eq!(cli.point_count(), 1_000);
    }

    #[test]
    fn explicit_points_override_exponent() {
        let cli = Cli::parse_from(["pi-estimator", "--headless", "--exponent", "5", "--points", "0"]);
        assert_eq!(cli.point_count(), 0);
    }

    #[test]
    fn exponent_outside_slider_range_is_rejected() {
        assert!(Cli::try_parse_from(["pi-estimator", "--exponent", "7"]).is_err());
        assert!(Cli::try_parse_from(["pi-estimator", "--exponent", "0"]).is_err());
    }
}
