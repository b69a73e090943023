//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Marker color for points with x² + y² <= 1
    pub inside_color: Color32,
    /// Marker color for points outside the unit disk
    pub outside_color: Color32,
    /// Opacity applied to both scatter series (0.0 = invisible, 1.0 = fully opaque)
    pub point_opacity: f32,
    /// Marker radius in screen points
    pub point_radius: f32,
    pub circle_color: Color32,
    pub square_color: Color32,
    /// Width of the circle and square outlines
    pub outline_width: f32,
    /// Number of segments used to approximate the unit circle
    pub circle_segments: usize,
    /// Axes span [-axis_limit, axis_limit] on both dimensions
    pub axis_limit: f64,
    /// Top-left corner of the annotation box, in plot coordinates
    pub annotation_anchor: [f64; 2],
    /// Size (width, height) of the annotation box, in plot coordinates
    pub annotation_size: [f64; 2],
    pub annotation_fill: Color32,
    pub annotation_opacity: f32,
    pub annotation_text_color: Color32,
    /// Decimal places for the estimate and true π inside the plot
    pub annotation_decimals: usize,
    pub grid_color: Color32,
    pub grid_opacity: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    inside_color: Color32::from_rgb(0, 0, 255),  // Blue
    outside_color: Color32::from_rgb(255, 0, 0), // Red
    point_opacity: 0.5,
    point_radius: 1.2,
    circle_color: Color32::from_rgb(0, 128, 0), // Green
    square_color: Color32::BLACK,
    outline_width: 2.0,
    circle_segments: 256,
    axis_limit: 1.1,
    annotation_anchor: [-1.05, 1.05],
    annotation_size: [0.78, 0.36],
    annotation_fill: Color32::from_rgb(245, 222, 179), // Wheat
    annotation_opacity: 0.8,
    annotation_text_color: Color32::BLACK,
    annotation_decimals: 6,
    grid_color: Color32::GRAY,
    grid_opacity: 0.6,
};
