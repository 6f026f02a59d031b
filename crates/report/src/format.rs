//! Number formatting for table cells.
//!
//! Both helpers spell non-finite values as `inf`, `-inf` and `nan`.

/// Formats `value` with `precision` digits after the decimal point.
///
/// ```
/// assert_eq!(nullpoint_report::format::fixed(2.0_f64.sqrt(), 6), "1.414214");
/// ```
#[must_use]
pub fn fixed(value: f64, precision: usize) -> String {
    match non_finite(value) {
        Some(text) => text.to_owned(),
        None => format!("{value:.precision$}"),
    }
}

/// Formats `value` in scientific notation with a signed, two-digit exponent.
///
/// ```
/// use nullpoint_report::format::sci;
///
/// assert_eq!(sci(0.000_012_345, 2), "1.23e-05");
/// assert_eq!(sci(4.0e120, 2), "4.00e+120");
/// ```
#[must_use]
pub fn sci(value: f64, precision: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_owned();
    }

    let formatted = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    format!("{mantissa}e{sign}{digits:0>2}")
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}
