use eframe::egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{Line, MarkerShape, PlotPoint, PlotPoints, PlotUi, Points, Polygon, Text};

use crate::config::plot::PLOT_CONFIG;
use crate::render::PlotImage;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub image: &'a PlotImage,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. SCATTER LAYER (Inside / Outside points)
// ============================================================================
pub struct ScatterLayer;

impl PlotLayer for ScatterLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for series in &ctx.image.series {
            let points = Points::new(series.label, PlotPoints::new(series.points.clone()))
                .color(series.color.linear_multiply(series.opacity))
                .radius(series.radius)
                .shape(MarkerShape::Circle)
                .filled(true);
            plot_ui.points(points);
        }
    }
}

// ============================================================================
// 2. OUTLINE LAYER (Unit circle and bounding square)
// ============================================================================
pub struct OutlineLayer;

impl PlotLayer for OutlineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for outline in &ctx.image.outlines {
            let vertices = outline.shape.vertices(PLOT_CONFIG.circle_segments);
            plot_ui.line(
                Line::new(outline.label, PlotPoints::new(vertices))
                    .color(outline.color)
                    .width(outline.width),
            );
        }
    }
}

// ============================================================================
// 3. ANNOTATION LAYER (Counts and estimate box)
// ============================================================================
pub struct AnnotationLayer;

impl PlotLayer for AnnotationLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(annotation) = &ctx.image.annotation else {
            return;
        };

        let [left, top] = annotation.anchor;
        let [width, height] = annotation.size;
        let corners = PlotPoints::new(vec![
            [left, top],
            [left + width, top],
            [left + width, top - height],
            [left, top - height],
        ]);

        // Empty name keeps the box out of the legend
        plot_ui.polygon(
            Polygon::new("", corners)
                .fill_color(annotation.fill.linear_multiply(annotation.opacity))
                .stroke(Stroke::new(1.0, Color32::from_black_alpha(100))),
        );

        let padding = 0.03;
        let text = RichText::new(annotation.text())
            .monospace()
            .color(annotation.text_color);
        plot_ui.text(
            Text::new("", PlotPoint::new(left + padding, top - padding), text)
                .anchor(Align2::LEFT_TOP),
        );
    }
}

// ============================================================================
// 4. PLACEHOLDER LAYER (Empty run)
// ============================================================================
pub struct PlaceholderLayer;

impl PlotLayer for PlaceholderLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if let Some(placeholder) = &ctx.image.placeholder {
            let [x, y] = placeholder.position;
            let message = RichText::new(placeholder.message)
                .size(16.0)
                .color(PLOT_CONFIG.annotation_text_color);
            plot_ui.text(
                Text::new("", PlotPoint::new(x, y), message).anchor(Align2::CENTER_CENTER),
            );
        }
    }
}
