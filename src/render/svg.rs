//! Standalone SVG serialization of a [`PlotImage`].

use eframe::egui::Color32;

use super::image::{OutlineShape, PlotImage};
use crate::config::plot::PLOT_CONFIG;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const FONT_SIZE: f64 = 13.0;
const TICKS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];

/// Maps plot coordinates onto the pixel canvas.
struct Canvas {
    width: f64,
    height: f64,
    plot_size: f64,
    limit: f64,
}

impl Canvas {
    fn new(size_px: u32, limit: f64) -> Self {
        let plot_size = f64::from(size_px.max(100));
        Self {
            width: MARGIN_LEFT + plot_size + MARGIN_RIGHT,
            height: MARGIN_TOP + plot_size + MARGIN_BOTTOM,
            plot_size,
            limit,
        }
    }

    fn scale(&self) -> f64 {
        self.plot_size / (2.0 * self.limit)
    }

    fn px(&self, x: f64) -> f64 {
        MARGIN_LEFT + (x + self.limit) * self.scale()
    }

    fn py(&self, y: f64) -> f64 {
        MARGIN_TOP + (self.limit - y) * self.scale()
    }
}

/// Render `image` as an SVG document whose plot area is `size_px` square.
pub fn to_svg(image: &PlotImage, size_px: u32) -> String {
    let canvas = Canvas::new(size_px, image.axis_limit);
    let mut out = String::new();

    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.0} {h:.0}\" font-family=\"sans-serif\" font-size=\"{FONT_SIZE}\">\n",
        w = canvas.width,
        h = canvas.height,
    ));
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");

    push_frame(&mut out, image, &canvas);

    // Scatter
    for series in &image.series {
        out.push_str(&format!(
            "<g fill=\"{}\" fill-opacity=\"{}\">\n",
            css_color(series.color),
            series.opacity
        ));
        for [x, y] in &series.points {
            out.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\"/>\n",
                canvas.px(*x),
                canvas.py(*y),
                series.radius
            ));
        }
        out.push_str("</g>\n");
    }

    // Reference shapes
    for outline in &image.outlines {
        let stroke = format!(
            "fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"",
            css_color(outline.color),
            outline.width
        );
        match outline.shape {
            OutlineShape::Circle { center, radius } => out.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {stroke}/>\n",
                canvas.px(center[0]),
                canvas.py(center[1]),
                radius * canvas.scale()
            )),
            OutlineShape::Rectangle { min, max } => out.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {stroke}/>\n",
                canvas.px(min[0]),
                canvas.py(max[1]),
                (max[0] - min[0]) * canvas.scale(),
                (max[1] - min[1]) * canvas.scale()
            )),
        }
    }

    if let Some(annotation) = &image.annotation {
        let x = canvas.px(annotation.anchor[0]);
        let y = canvas.py(annotation.anchor[1]);
        out.push_str(&format!(
            "<rect class=\"annotation\" x=\"{x:.2}\" y=\"{y:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"6\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"#000000\" stroke-opacity=\"0.4\"/>\n",
            annotation.size[0] * canvas.scale(),
            annotation.size[1] * canvas.scale(),
            css_color(annotation.fill),
            annotation.opacity
        ));
        out.push_str(&format!(
            "<text fill=\"{}\">\n",
            css_color(annotation.text_color)
        ));
        for (i, line) in annotation.lines.iter().enumerate() {
            out.push_str(&format!(
                "<tspan x=\"{:.2}\" y=\"{:.2}\">{}</tspan>\n",
                x + 8.0,
                y + 8.0 + FONT_SIZE * 1.4 * (i as f64 + 1.0) - 4.0,
                escape_xml(line)
            ));
        }
        out.push_str("</text>\n");
    }

    if image.show_legend {
        push_legend(&mut out, image, &canvas);
    }

    if let Some(placeholder) = &image.placeholder {
        out.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>\n",
            canvas.px(placeholder.position[0]),
            canvas.py(placeholder.position[1]),
            escape_xml(placeholder.message)
        ));
    }

    out.push_str("</svg>\n");
    out
}

/// Title, grid, tick labels and axis labels.
fn push_frame(out: &mut String, image: &PlotImage, canvas: &Canvas) {
    let left = canvas.px(-canvas.limit);
    let right = canvas.px(canvas.limit);
    let top = canvas.py(canvas.limit);
    let bottom = canvas.py(-canvas.limit);

    out.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"{}\">{}</text>\n",
        (left + right) / 2.0,
        MARGIN_TOP / 2.0 + 5.0,
        FONT_SIZE * 1.3,
        escape_xml(&image.title)
    ));

    out.push_str(&format!(
        "<g stroke=\"{}\" stroke-opacity=\"{}\" stroke-dasharray=\"4 3\">\n",
        css_color(PLOT_CONFIG.grid_color),
        PLOT_CONFIG.grid_opacity
    ));
    for tick in TICKS {
        out.push_str(&format!(
            "<line x1=\"{x:.2}\" y1=\"{top:.2}\" x2=\"{x:.2}\" y2=\"{bottom:.2}\"/>\n",
            x = canvas.px(tick)
        ));
        out.push_str(&format!(
            "<line x1=\"{left:.2}\" y1=\"{y:.2}\" x2=\"{right:.2}\" y2=\"{y:.2}\"/>\n",
            y = canvas.py(tick)
        ));
    }
    out.push_str("</g>\n");

    out.push_str(&format!(
        "<rect x=\"{left:.2}\" y=\"{top:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"#000000\"/>\n",
        right - left,
        bottom - top
    ));

    for tick in TICKS {
        out.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\">{tick:.1}</text>\n",
            canvas.px(tick),
            bottom + FONT_SIZE + 4.0
        ));
        out.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" dominant-baseline=\"middle\">{tick:.1}</text>\n",
            left - 6.0,
            canvas.py(tick)
        ));
    }

    out.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\">{}</text>\n",
        (left + right) / 2.0,
        canvas.height - 15.0,
        escape_xml(image.x_label)
    ));
    out.push_str(&format!(
        "<text x=\"20\" y=\"{cy:.2}\" text-anchor=\"middle\" transform=\"rotate(-90 20 {cy:.2})\">{}</text>\n",
        escape_xml(image.y_label),
        cy = (top + bottom) / 2.0
    ));
}

fn push_legend(out: &mut String, image: &PlotImage, canvas: &Canvas) {
    let row_height = FONT_SIZE * 1.5;
    let rows = image.series.len() + image.outlines.len();
    let width = 170.0;
    let height = row_height * rows as f64 + 8.0;
    let x = canvas.px(canvas.limit) - width - 8.0;
    let y = canvas.py(canvas.limit) + 8.0;

    out.push_str(&format!(
        "<g class=\"legend\">\n<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" rx=\"4\" fill=\"#ffffff\" fill-opacity=\"0.8\" stroke=\"#cccccc\"/>\n"
    ));

    let mut row_y = y + 4.0 + row_height / 2.0;
    for series in &image.series {
        out.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{row_y:.2}\" r=\"4\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
            x + 14.0,
            css_color(series.color),
            series.opacity
        ));
        push_legend_label(out, x + 28.0, row_y, series.label);
        row_y += row_height;
    }
    for outline in &image.outlines {
        out.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{row_y:.2}\" x2=\"{:.2}\" y2=\"{row_y:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            x + 6.0,
            x + 22.0,
            css_color(outline.color),
            outline.width
        ));
        push_legend_label(out, x + 28.0, row_y, outline.label);
        row_y += row_height;
    }
    out.push_str("</g>\n");
}

fn push_legend_label(out: &mut String, x: f64, y: f64, label: &str) {
    out.push_str(&format!(
        "<text x=\"{x:.2}\" y=\"{y:.2}\" dominant-baseline=\"middle\">{}</text>\n",
        escape_xml(label)
    ));
}

fn css_color(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::image::{NO_POINTS_MESSAGE, render};
    use crate::simulation::{ScriptedPoints, simulate, simulate_with};

    #[test]
    fn empty_run_svg_has_placeholder_and_no_annotation() {
        let (samples, estimate) = simulate(0);
        let svg = to_svg(&render(&samples, &estimate), 400);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(NO_POINTS_MESSAGE));
        assert!(!svg.contains("class=\"annotation\""));
        assert!(!svg.contains("class=\"legend\""));
    }

    #[test]
    fn svg_contains_points_outlines_and_annotation() {
        let script = ScriptedPoints::new(vec![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.1, 0.1]]);
        let (samples, estimate) = simulate_with(4, script);
        let svg = to_svg(&render(&samples, &estimate), 400);

        assert!(svg.contains("class=\"annotation\""));
        assert!(svg.contains("class=\"legend\""));
        assert!(svg.contains("Estimate for π: 3.000000"));
        assert!(svg.contains("Circle Boundary (r=1)"));
        assert!(svg.contains("Square Boundary"));
        assert!(svg.contains(&css_color(PLOT_CONFIG.inside_color)));
        assert!(svg.contains(&css_color(PLOT_CONFIG.outside_color)));
        assert!(!svg.contains(NO_POINTS_MESSAGE));
    }

    #[test]
    fn canvas_maps_unit_square_inside_plot_area() {
        let canvas = Canvas::new(440, 1.1);
        assert!((canvas.px(-1.1) - MARGIN_LEFT).abs() < 1e-9);
        assert!((canvas.px(1.1) - (MARGIN_LEFT + 440.0)).abs() < 1e-9);
        assert!((canvas.py(1.1) - MARGIN_TOP).abs() < 1e-9);
        assert!(canvas.py(-1.0) > canvas.py(1.0));
        assert!((canvas.scale() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn xml_text_is_escaped() {
        assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
