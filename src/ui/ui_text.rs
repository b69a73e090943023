//! Static user-facing strings.

pub struct UiText {
    pub window_title: &'static str,
    pub app_title: &'static str,

    // Side panel
    pub controls_heading: &'static str,
    pub slider_label: &'static str,
    pub run_button: &'static str,
    pub explanation_toggle: &'static str,
    pub author_line: &'static str,
    pub author_email: &'static str,

    // Explanation sections
    pub monte_carlo_heading: &'static str,
    pub monte_carlo_body: &'static [&'static str],
    pub geometry_heading: &'static str,
    pub geometry_steps: &'static [&'static str],

    // Results panel
    pub results_heading: &'static str,
    pub idle_message: &'static str,
    pub label_total_points: &'static str,
    pub label_points_inside: &'static str,
    pub label_estimate: &'static str,
    pub label_actual: &'static str,
    pub label_difference: &'static str,
    pub label_standard_error: &'static str,
    pub label_confidence_interval: &'static str,
    pub label_elapsed: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "π Estimation using Monte Carlo Simulation",
    app_title: "π Estimation using Monte Carlo Simulation",

    controls_heading: "Simulation Controls",
    slider_label: "Number of random points (log scale)",
    run_button: "Run Simulation",
    explanation_toggle: "Show explanation",
    author_line: "Author: Chris Hopwood",
    author_email: "chopwood24@gmail.com",

    monte_carlo_heading: "What is Monte Carlo Simulation?",
    monte_carlo_body: &[
        "Monte Carlo simulation relies on repeated random sampling to obtain numerical results.",
        "Instead of solving a problem with exact equations, you build a probabilistic model of it, run the model many times with random inputs, and look at the distribution or average of the outcomes.",
        "Here the model is a random point in a square: the share of points that land inside the inscribed circle tells us the ratio of the two areas, which is π / 4.",
    ],
    geometry_heading: "Estimating Pi Geometrically",
    geometry_steps: &[
        "1. Take the square from -1 to 1 on both axes (area 4).",
        "2. Inscribe the circle of radius 1 (area π).",
        "3. Generate points (x, y) uniformly inside the square.",
        "4. A point is inside the circle when x² + y² <= 1.",
        "5. Inside / Total approximates Circle Area / Square Area = π / 4.",
        "6. So π ≈ 4 × Inside / Total. More points usually give a better estimate.",
    ],

    results_heading: "Simulation Results",
    idle_message: "Adjust the slider and click 'Run Simulation' in the sidebar to start.",
    label_total_points: "Total points generated",
    label_points_inside: "Points inside the circle",
    label_estimate: "Estimated value of π",
    label_actual: "Actual value of π",
    label_difference: "Difference",
    label_standard_error: "Standard error",
    label_confidence_interval: "95% interval",
    label_elapsed: "Run time",
};
