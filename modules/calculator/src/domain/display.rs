//! Result formatting for the render boundary.
//!
//! Finite values with magnitude in `[1e-10, 1e10)` (zero aside) are shown as
//! plain decimals rounded to 10 fractional digits with trailing zeros
//! stripped; values outside that range switch to scientific notation with 6
//! fractional digits. Non-finite values render the way the browser would
//! stringify them.

/// Lower magnitude bound for plain decimal display (exclusive of exact zero).
const DECIMAL_MIN: f64 = 1e-10;
/// Upper magnitude bound for plain decimal display.
const DECIMAL_MAX: f64 = 1e10;

/// Format an operation result for display.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (DECIMAL_MIN..DECIMAL_MAX).contains(&magnitude) {
        let fixed = format!("{value:.10}");
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        format!("{value:.6e}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_lose_trailing_zeros() {
        assert_eq!(format_result(15.0), "15");
        assert_eq!(format_result(-3.0), "-3");
        assert_eq!(format_result(0.0), "0");
    }

    #[test]
    fn fractions_keep_significant_digits() {
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(2.25), "2.25");
    }

    #[test]
    fn magnitude_bounds_switch_to_scientific() {
        assert_eq!(format_result(1e10), "1.000000e10");
        assert_eq!(format_result(9999999999.0), "9999999999");
        assert_eq!(format_result(1e-10), "0.0000000001");
        assert_eq!(format_result(1e-11), "1.000000e-11");
    }

    #[test]
    fn non_finite_values_render_like_the_browser() {
        assert_eq!(format_result(f64::INFINITY), "Infinity");
        assert_eq!(format_result(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_result(f64::NAN), "NaN");
    }
}
