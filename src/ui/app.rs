use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};

use crate::config::SIMULATION;
use crate::ui::app_state::LastRun;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Deserialize, Serialize)]
pub struct PiEstimatorApp {
    // UI state (persisted between launches)
    #[serde(default = "default_exponent")]
    pub(super) exponent: u32,
    #[serde(default = "default_show_explanation")]
    pub(super) show_explanation: bool,

    // Results of the last run - never persisted
    #[serde(skip)]
    pub(super) last_run: Option<LastRun>,
}

/// Default slider position - used by serde and initialization
fn default_exponent() -> u32 {
    SIMULATION.default_exponent
}

fn default_show_explanation() -> bool {
    true
}

impl Default for PiEstimatorApp {
    fn default() -> Self {
        Self::new_with_initial_state()
    }
}

impl PiEstimatorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: PiEstimatorApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted state found. Creating anew.");
                }
                app = PiEstimatorApp::new_with_initial_state();
            }
        } else {
            app = PiEstimatorApp::new_with_initial_state();
        }

        // A hand-edited state file may carry an exponent the slider can't show
        if !(SIMULATION.min_exponent..=SIMULATION.max_exponent).contains(&app.exponent) {
            log::warn!(
                "Persisted exponent {} out of range, resetting to {}",
                app.exponent,
                default_exponent()
            );
            app.exponent = default_exponent();
        }

        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            exponent: default_exponent(),
            show_explanation: default_show_explanation(),
            last_run: None,
        }
    }

    /// The most recent run, if the button has been pressed at least once.
    pub fn last_run(&self) -> Option<&LastRun> {
        self.last_run.as_ref()
    }
}

impl eframe::App for PiEstimatorApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.last_run = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_default_exponent() {
        let app = PiEstimatorApp::new_with_initial_state();
        assert!(app.last_run().is_none());
        assert_eq!(app.exponent, SIMULATION.default_exponent);
        assert_eq!(app.point_count(), 1_000);
    }

    #[test]
    fn each_run_replaces_the_previous_one() {
        let mut app = PiEstimatorApp::new_with_initial_state();
        app.exponent = 1;
        app.run_simulation();
        assert_eq!(app.last_run().map(|run| run.estimate.points_total), Some(10));

        app.exponent = 2;
        app.run_simulation();
        let run = app.last_run().expect("run");
        assert_eq!(run.estimate.points_total, 100);
        assert_eq!(run.samples.len(), 100);
    }

    #[test]
    fn persisted_state_skips_results() {
        let mut app = PiEstimatorApp::new_with_initial_state();
        app.exponent = 5;
        app.run_simulation();

        let json = serde_json::to_string(&app).unwrap();
        assert!(!json.contains("last_run"));

        let restored: PiEstimatorApp = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.exponent, 5);
        assert!(restored.last_run().is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let restored: PiEstimatorApp = serde_json::from_str("{}").unwrap();
        assert_eq!(restored.exponent, SIMULATION.default_exponent);
        assert!(restored.show_explanation);
    }
}
