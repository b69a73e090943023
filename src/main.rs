#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::Result;
use clap::Parser;
use eframe::NativeOptions;
use eframe::egui::ViewportBuilder;
use std::path::PathBuf;

use pi_estimator::config::APP_STATE_PATH;
use pi_estimator::headless::{check_gui_args, run_headless};
use pi_estimator::ui::config::UI_TEXT;
use pi_estimator::{Cli, run_app};

fn main() -> Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Terminal mode
    if args.headless {
        return run_headless(&args);
    }
    check_gui_args(&args)?;

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        viewport: ViewportBuilder::default().with_inner_size([1100.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(|cc| Ok(run_app(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start window: {e}"))
}
