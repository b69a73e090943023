use eframe::egui::Color32;
use std::f64::consts::{PI, TAU};

use crate::config::plot::PLOT_CONFIG;
use crate::models::{EstimateResult, SampleSet};
use crate::utils::{format_count, format_fixed};

pub const LABEL_INSIDE: &str = "Inside Circle";
pub const LABEL_OUTSIDE: &str = "Outside Circle";
pub const LABEL_CIRCLE: &str = "Circle Boundary (r=1)";
pub const LABEL_SQUARE: &str = "Square Boundary";
pub const AXIS_LABEL_X: &str = "X-coordinate";
pub const AXIS_LABEL_Y: &str = "Y-coordinate";
pub const NO_POINTS_MESSAGE: &str = "No points generated";

/// A complete, backend-agnostic description of the figure for one run.
///
/// The egui plot view and the SVG writer both draw from this; neither
/// looks at the raw `SampleSet` again.
#[derive(Debug, Clone)]
pub struct PlotImage {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Both axes span [-axis_limit, axis_limit] with a 1:1 aspect ratio.
    pub axis_limit: f64,
    /// Back to front.
    pub series: Vec<ScatterSeries>,
    pub outlines: Vec<Outline>,
    pub annotation: Option<Annotation>,
    pub placeholder: Option<Placeholder>,
    pub show_legend: bool,
}

#[derive(Debug, Clone)]
pub struct ScatterSeries {
    pub label: &'static str,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
    pub opacity: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineShape {
    Circle { center: [f64; 2], radius: f64 },
    Rectangle { min: [f64; 2], max: [f64; 2] },
}

impl OutlineShape {
    /// Closed polyline (first vertex repeated at the end).
    pub fn vertices(&self, segments: usize) -> Vec<[f64; 2]> {
        match *self {
            OutlineShape::Circle { center, radius } => {
                let segments = segments.max(3);
                (0..=segments)
                    .map(|i| {
                        let theta = TAU * i as f64 / segments as f64;
                        [
                            center[0] + radius * theta.cos(),
                            center[1] + radius * theta.sin(),
                        ]
                    })
                    .collect()
            }
            OutlineShape::Rectangle { min, max } => vec![
                [min[0], min[1]],
                [max[0], min[1]],
                [max[0], max[1]],
                [min[0], max[1]],
                [min[0], min[1]],
            ],
        }
    }
}

/// Unfilled reference shape.
#[derive(Debug, Clone)]
pub struct Outline {
    pub label: &'static str,
    pub shape: OutlineShape,
    pub color: Color32,
    pub width: f32,
}

/// Text box with the run's counts and estimate.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// Top-left corner in plot coordinates.
    pub anchor: [f64; 2],
    /// Width and height in plot coordinates.
    pub size: [f64; 2],
    pub lines: Vec<String>,
    pub fill: Color32,
    pub opacity: f32,
    pub text_color: Color32,
}

impl Annotation {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Centered message drawn in place of an empty scatter.
#[derive(Debug, Clone)]
pub struct Placeholder {
    pub position: [f64; 2],
    pub message: &'static str,
}

/// Build the figure for a finished run.
pub fn render(samples: &SampleSet, estimate: &EstimateResult) -> PlotImage {
    let title = format!(
        "Monte Carlo Estimation of Pi (N = {})",
        format_count(estimate.points_total)
    );

    let outlines = vec![
        Outline {
            label: LABEL_CIRCLE,
            shape: OutlineShape::Circle {
                center: [0.0, 0.0],
                radius: 1.0,
            },
            color: PLOT_CONFIG.circle_color,
            width: PLOT_CONFIG.outline_width,
        },
        Outline {
            label: LABEL_SQUARE,
            shape: OutlineShape::Rectangle {
                min: [-1.0, -1.0],
                max: [1.0, 1.0],
            },
            color: PLOT_CONFIG.square_color,
            width: PLOT_CONFIG.outline_width,
        },
    ];

    let mut image = PlotImage {
        title,
        x_label: AXIS_LABEL_X,
        y_label: AXIS_LABEL_Y,
        axis_limit: PLOT_CONFIG.axis_limit,
        series: Vec::new(),
        outlines,
        annotation: None,
        placeholder: None,
        show_legend: false,
    };

    if estimate.is_empty() || samples.is_empty() {
        image.placeholder = Some(Placeholder {
            position: [0.0, 0.0],
            message: NO_POINTS_MESSAGE,
        });
        return image;
    }

    let (inside, outside) = samples.partition_points();
    image.series = vec![
        scatter(LABEL_INSIDE, inside, PLOT_CONFIG.inside_color),
        scatter(LABEL_OUTSIDE, outside, PLOT_CONFIG.outside_color),
    ];
    image.annotation = Some(annotation(estimate));
    image.show_legend = true;
    image
}

fn scatter(label: &'static str, points: Vec<[f64; 2]>, color: Color32) -> ScatterSeries {
    ScatterSeries {
        label,
        points,
        color,
        opacity: PLOT_CONFIG.point_opacity,
        radius: PLOT_CONFIG.point_radius,
    }
}

fn annotation(estimate: &EstimateResult) -> Annotation {
    let decimals = PLOT_CONFIG.annotation_decimals;
    Annotation {
        anchor: PLOT_CONFIG.annotation_anchor,
        size: PLOT_CONFIG.annotation_size,
        lines: vec![
            format!("Points Inside: {}", format_count(estimate.points_inside)),
            format!("Total Points: {}", format_count(estimate.points_total)),
            format!("Estimate for π: {}", format_fixed(estimate.pi_estimate, decimals)),
            format!("Actual π: {}", format_fixed(PI, decimals)),
        ],
        fill: PLOT_CONFIG.annotation_fill,
        opacity: PLOT_CONFIG.annotation_opacity,
        text_color: PLOT_CONFIG.annotation_text_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{ScriptedPoints, simulate, simulate_with};

    #[test]
    fn empty_run_draws_placeholder_only() {
        let (samples, estimate) = simulate(0);
        let image = render(&samples, &estimate);

        assert!(image.annotation.is_none());
        assert!(!image.show_legend);
        assert!(image.series.is_empty());
        let placeholder = image.placeholder.expect("placeholder");
        assert_eq!(placeholder.message, NO_POINTS_MESSAGE);
        assert_eq!(placeholder.position, [0.0, 0.0]);
        // Reference shapes are still drawn
        assert_eq!(image.outlines.len(), 2);
        assert_eq!(image.title, "Monte Carlo Estimation of Pi (N = 0)");
    }

    #[test]
    fn scripted_run_partitions_series() {
        let script = ScriptedPoints::new(vec![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.1, 0.1]]);
        let (samples, estimate) = simulate_with(4, script);
        let image = render(&samples, &estimate);

        assert!(image.placeholder.is_none());
        assert!(image.show_legend);
        assert_eq!(image.series.len(), 2);

        let inside = &image.series[0];
        let outside = &image.series[1];
        assert_eq!(inside.label, LABEL_INSIDE);
        assert_eq!(inside.points, vec![[1.0, 0.0], [0.0, 1.0], [0.1, 0.1]]);
        assert_eq!(inside.color, PLOT_CONFIG.inside_color);
        assert_eq!(outside.label, LABEL_OUTSIDE);
        assert_eq!(outside.points, vec![[1.0, 1.0]]);
        assert_eq!(outside.color, PLOT_CONFIG.outside_color);
        assert!(inside.opacity < 1.0 && outside.opacity < 1.0);
    }

    #[test]
    fn annotation_reports_counts_and_both_pi_values() {
        let script = ScriptedPoints::new(vec![[0.0, 0.0], [0.9, 0.9]]);
        let (samples, estimate) = simulate_with(2_000, script);
        let image = render(&samples, &estimate);

        let annotation = image.annotation.expect("annotation");
        assert_eq!(
            annotation.lines,
            vec![
                "Points Inside: 1,000".to_string(),
                "Total Points: 2,000".to_string(),
                "Estimate for π: 2.000000".to_string(),
                "Actual π: 3.141593".to_string(),
            ]
        );
        assert_eq!(annotation.anchor, [-1.05, 1.05]);
        assert_eq!(image.title, "Monte Carlo Estimation of Pi (N = 2,000)");
    }

    #[test]
    fn axes_span_slightly_beyond_unit_square() {
        let (samples, estimate) = simulate(10);
        let image = render(&samples, &estimate);
        assert!(image.axis_limit > 1.0 && image.axis_limit <= 1.2);
        assert_eq!(image.x_label, AXIS_LABEL_X);
        assert_eq!(image.y_label, AXIS_LABEL_Y);
    }

    #[test]
    fn circle_vertices_lie_on_unit_circle_and_close() {
        let shape = OutlineShape::Circle {
            center: [0.0, 0.0],
            radius: 1.0,
        };
        let vertices = shape.vertices(64);
        assert_eq!(vertices.len(), 65);
        for [x, y] in &vertices {
            assert!(((x * x + y * y).sqrt() - 1.0).abs() < 1e-12);
        }
        let first = vertices[0];
        let last = vertices[64];
        assert!((first[0] - last[0]).abs() < 1e-12 && (first[1] - last[1]).abs() < 1e-12);
    }

    #[test]
    fn square_vertices_trace_corners() {
        let shape = OutlineShape::Rectangle {
            min: [-1.0, -1.0],
            max: [1.0, 1.0],
        };
        assert_eq!(
            shape.vertices(0),
            vec![[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0]]
        );
    }
}
