use eframe::egui::{self, RichText};
use egui_plot::{Corner, GridMark, Legend, Plot};

use crate::config::plot::PLOT_CONFIG;
use crate::render::PlotImage;
use crate::ui::config::UI_CONFIG;

use crate::ui::plot_layers::{
    AnnotationLayer, LayerContext, OutlineLayer, PlaceholderLayer, PlotLayer, ScatterLayer,
};

/// Grid spacing for both axes, in plot units.
const GRID_STEP: f64 = 0.5;

/// Draws a [`PlotImage`] into the current egui layout as a fixed, square plot.
pub fn show_plot(ui: &mut egui::Ui, image: &PlotImage) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&image.title)
                .heading()
                .color(UI_CONFIG.colors.value),
        );
    });

    let limit = image.axis_limit;
    let side = ui.available_width().min(ui.available_height()).max(200.0);

    let mut plot = Plot::new("pi_plot")
        .width(side)
        .height(side)
        .data_aspect(1.0)
        .x_axis_label(image.x_label)
        .y_axis_label(image.y_label)
        .x_grid_spacer(grid_spacer)
        .y_grid_spacer(grid_spacer)
        .label_formatter(|_, point| format!("x = {:.3}\ny = {:.3}", point.x, point.y))
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false);

    if image.show_legend {
        plot = plot.legend(Legend::default().position(Corner::RightTop));
    }

    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds_x(-limit..=limit);
        plot_ui.set_plot_bounds_y(-limit..=limit);

        let ctx = LayerContext { image };

        // Back to front
        let layers: Vec<Box<dyn PlotLayer>> = vec![
            Box::new(ScatterLayer),
            Box::new(OutlineLayer),
            Box::new(AnnotationLayer),
            Box::new(PlaceholderLayer),
        ];

        for layer in layers {
            layer.render(plot_ui, &ctx);
        }
    });
}

/// Fixed grid at multiples of `GRID_STEP` inside the axis limit.
fn grid_spacer(input: egui_plot::GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let limit = PLOT_CONFIG.axis_limit;
    let start = (min.max(-limit) / GRID_STEP).ceil() as i64;
    let end = (max.min(limit) / GRID_STEP).floor() as i64;
    (start..=end)
        .map(|i| GridMark {
            value: i as f64 * GRID_STEP,
            step_size: GRID_STEP,
        })
        .collect()
}
