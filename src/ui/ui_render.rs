use eframe::egui::{CentralPanel, CollapsingHeader, Context, Frame, ScrollArea, SidePanel, Ui};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{ControlsEvent, ControlsPanel, Panel};
use crate::ui::ui_plot_view::show_plot;
use crate::ui::utils::{section_heading, spaced_separator};

use super::app::PiEstimatorApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl PiEstimatorApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(8.0);
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let events = ControlsPanel::new(self.exponent, self.show_explanation).render(ui);

                for event in events {
                    match event {
                        ControlsEvent::Exponent(exponent) => {
                            self.exponent = exponent;
                        }
                        ControlsEvent::Run => {
                            #[cfg(debug_assertions)]
                            if DEBUG_FLAGS.print_ui_interactions {
                                log::info!("Run requested with {} points", self.point_count());
                            }
                            self.run_simulation();
                        }
                        ControlsEvent::ShowExplanation(show) => {
                            self.show_explanation = show;
                        }
                    }
                }

                spaced_separator(ui);
                ui.label_subdued(UI_TEXT.author_line);
                ui.hyperlink_to(
                    UI_TEXT.author_email,
                    format!("mailto:{}", UI_TEXT.author_email),
                );
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(12.0);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.label_header(UI_TEXT.app_title);

                    if self.show_explanation {
                        render_explanation(ui);
                    }

                    self.render_results(ui);
                });
            });
    }

    fn render_results(&self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.results_heading);

        let Some(run) = &self.last_run else {
            ui.label_info(UI_TEXT.idle_message);
            return;
        };

        for (label, value) in run.result_rows() {
            ui.metric(label, &value, UI_CONFIG.colors.value);
        }

        ui.add_space(10.0);
        show_plot(ui, &run.image);
    }
}

fn render_explanation(ui: &mut Ui) {
    CollapsingHeader::new(UI_TEXT.monte_carlo_heading)
        .default_open(true)
        .show(ui, |ui| {
            for paragraph in UI_TEXT.monte_carlo_body {
                ui.label(*paragraph);
                ui.add_space(4.0);
            }
        });

    CollapsingHeader::new(UI_TEXT.geometry_heading)
        .default_open(true)
        .show(ui, |ui| {
            for step in UI_TEXT.geometry_steps {
                ui.label(*step);
            }
        });
}
