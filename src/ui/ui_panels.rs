use eframe::egui::{Button, Slider, Ui};

use crate::config::SIMULATION;
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};
use crate::utils::format_count;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsEvent {
    /// Slider moved to a new power of ten.
    Exponent(u32),
    /// The run button was pressed.
    Run,
    /// The explanation toggle was flipped.
    ShowExplanation(bool),
}

/// Side-panel controls: log-scale point count slider and the run button.
pub struct ControlsPanel {
    exponent: u32,
    show_explanation: bool,
}

impl ControlsPanel {
    pub fn new(exponent: u32, show_explanation: bool) -> Self {
        Self {
            exponent,
            show_explanation,
        }
    }

    fn render_point_slider(&mut self, ui: &mut Ui) -> Option<u32> {
        ui.label(colored_subsection_heading(UI_TEXT.slider_label));

        let previous = self.exponent;
        ui.add(
            Slider::new(
                &mut self.exponent,
                SIMULATION.min_exponent..=SIMULATION.max_exponent,
            )
            .step_by(1.0)
            .custom_formatter(|value, _| format!("10^{}", value as u32)),
        );

        ui.label_subdued(format!(
            "{} points",
            format_count(SIMULATION.points_for_exponent(self.exponent))
        ));

        (self.exponent != previous).then_some(self.exponent)
    }
}

impl Panel for ControlsPanel {
    type Event = ControlsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.controls_heading);

        if let Some(exponent) = self.render_point_slider(ui) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Point count slider moved to 10^{}", exponent);
            }
            events.push(ControlsEvent::Exponent(exponent));
        }

        ui.add_space(8.0);
        if ui
            .add_sized([ui.available_width(), 28.0], Button::new(UI_TEXT.run_button))
            .clicked()
        {
            events.push(ControlsEvent::Run);
        }

        spaced_separator(ui);

        if ui
            .checkbox(&mut self.show_explanation, UI_TEXT.explanation_toggle)
            .changed()
        {
            events.push(ControlsEvent::ShowExplanation(self.show_explanation));
        }

        events
    }
}
