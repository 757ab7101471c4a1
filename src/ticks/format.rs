//! Number formatting for tick labels.

/// Format `value` with `precision` significant digits in the `%g` style:
/// fixed notation for exponents in `[-4, precision)`, scientific otherwise,
/// trailing zeros removed.
///
/// ```
/// use climplot::ticks::format_general;
/// assert_eq!(format_general(0.25, 10), "0.25");
/// assert_eq!(format_general(1.5e-5, 10), "1.5e-05");
/// assert_eq!(format_general(1e15, 10), "1e+15");
/// ```
pub fn format_general(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = precision.max(1);
    // the exponent must come from the value rounded to `precision` digits
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Label for a colorbar tick: `"0"` for zero, no decimals for whole numbers,
/// otherwise the shortest ten-significant-digit form.
pub fn clean_label(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format_general(value, 10)
}
