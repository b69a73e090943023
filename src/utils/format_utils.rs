/// Formats a count with comma thousands separators: 1000000 -> "1,000,000".
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fixed-precision float formatting shared by the plot annotation and the
/// results panel.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Compact wall-clock duration: "850µs", "12.3ms", "1.42s".
pub fn format_elapsed(duration: std::time::Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
