//! Terminal mode: one run, printed as text or JSON, optionally exported as SVG.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::fs;

use crate::Cli;
use crate::render::to_svg;
use crate::simulation::UniformSquare;
use crate::ui::app_state::LastRun;
use crate::utils::format_count;

/// Error types for command-line usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A flag that only makes sense together with `--headless`
    HeadlessOnly(&'static str),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::HeadlessOnly(flag) => write!(f, "{} requires --headless", flag),
        }
    }
}

impl std::error::Error for AppError {}

/// Reject output flags when the window is going to open instead.
pub fn check_gui_args(args: &Cli) -> Result<(), AppError> {
    if args.headless {
        return Ok(());
    }
    if args.json {
        return Err(AppError::HeadlessOnly("--json"));
    }
    if args.svg.is_some() {
        return Err(AppError::HeadlessOnly("--svg"));
    }
    if args.points.is_some() {
        return Err(AppError::HeadlessOnly("--points"));
    }
    if args.seed.is_some() {
        return Err(AppError::HeadlessOnly("--seed"));
    }
    Ok(())
}

/// Run one simulation for the command-line arguments and report it on stdout.
pub fn run_headless(args: &Cli) -> Result<()> {
    let n = args.point_count();
    log::info!("Running headless simulation with {} points", format_count(n));

    let run = match args.seed {
        Some(seed) => LastRun::execute(n, UniformSquare::new(StdRng::seed_from_u64(seed))),
        None => LastRun::execute(n, UniformSquare::new(rand::thread_rng())),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&run.estimate)
            .context("Failed to serialize estimate")?;
        println!("{}", json);
    } else {
        println!("{}", text_report(&run));
    }

    if let Some(path) = &args.svg {
        let svg = to_svg(&run.image, args.svg_size);
        fs::write(path, svg)
            .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
        log::info!("Plot written to {}", path.display());
    }

    Ok(())
}

/// Plain-text version of the results panel.
pub fn text_report(run: &LastRun) -> String {
    let rows = run.result_rows();
    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:<width$}  {}", format!("{}:", label), value, width = width + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ScriptedPoints;
    use clap::Parser;

    #[test]
    fn gui_rejects_headless_only_flags() {
        let cli = Cli::parse_from(["pi-estimator", "--json"]);
        assert_eq!(check_gui_args(&cli), Err(AppError::HeadlessOnly("--json")));

        let cli = Cli::parse_from(["pi-estimator", "--svg", "out.svg"]);
        assert_eq!(check_gui_args(&cli), Err(AppError::HeadlessOnly("--svg")));

        let cli = Cli::parse_from(["pi-estimator", "--headless", "--json"]);
        assert_eq!(check_gui_args(&cli), Ok(()));
    }

    #[test]
    fn text_report_lists_every_row() {
        let script = ScriptedPoints::new(vec![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.1, 0.1]]);
        let run = LastRun::execute(4, script);
        let report = text_report(&run);

        assert_eq!(report.lines().count(), run.result_rows().len());
        assert!(report.contains("3.00000000"));
        assert!(report.contains("3.14159265"));
        assert!(report.contains("0.14159265"));
    }

    #[test]
    fn headless_run_writes_svg() {
        let path = std::env::temp_dir().join(format!("pi_estimator_{}.svg", std::process::id()));
        let cli = Cli::parse_from([
            "pi-estimator",
            "--headless",
            "--points",
            "50",
            "--seed",
            "1",
            "--svg",
            path.to_str().unwrap(),
        ]);

        run_headless(&cli).unwrap();
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("N = 50"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn svg_to_missing_directory_reports_context() {
        let cli = Cli::parse_from([
            "pi-estimator",
            "--headless",
            "--points",
            "0",
            "--svg",
            "/nonexistent-dir/for/sure/plot.svg",
        ]);

        let err = run_headless(&cli).unwrap_err();
        assert!(err.to_string().contains("Failed to write SVG"));
    }
}
