use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    /// Plot canvas behind the scatter
    pub plot_background: Color32,
    pub info: Color32,
    pub value: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
    /// Decimal places for the numbers in the results panel
    pub result_decimals: usize,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE, // Sets every subsection heading
        central_panel: Color32::from_rgb(30, 30, 34),
        side_panel: Color32::from_rgb(25, 25, 25),
        plot_background: Color32::from_rgb(250, 250, 250),
        info: Color32::from_rgb(100, 200, 255),
        value: Color32::from_rgb(230, 230, 230),
    },
    side_panel_min_width: 220.0,
    result_decimals: 8,
};
