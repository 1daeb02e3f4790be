// Display formatting for converted numbers. Rounding here is for display only;
// the engine hands back full-precision values.

/// Default number of decimals the converter pages show.
pub const DEFAULT_PRECISION: u32 = 6;

/// Round `value` half up to `precision` decimals and print it without trailing zeros.
pub fn format_value(value: f64, precision: u32) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let scale = 10f64.powi(precision as i32);
    let scaled = (value + f64::EPSILON) * scale + 0.5;
    // Near f64::MAX the scaled value overflows; such magnitudes have no
    // fractional digits to round anyway.
    let mut rounded = if scaled.is_finite() {
        scaled.floor() / scale
    } else {
        value
    };
    if rounded == 0.0 {
        // Avoid printing "-0".
        rounded = 0.0;
    }

    let fixed = format!("{:.*}", precision as usize, rounded);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// Format a value followed by its unit symbol, e.g. `"5.08 cm"`.
pub fn format_quantity(value: f64, unit: &str, precision: u32) -> String {
    format!("{} {}", format_value(value, precision), unit)
}
