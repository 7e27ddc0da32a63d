//! Display formatting for computed values.
//!
//! Rounding to one decimal is half-up (`floor(x * 10 + 0.5)`), matching how the reference
//! spreadsheet displays numbers. Non-finite values never reach the display.

/// Tolerance for treating a rounded value as a whole number.
const WHOLE_TOLERANCE: f64 = 1e-9;

fn round_half_up_1(x: f64) -> f64 {
    let r = (x * 10.0 + 0.5).floor() / 10.0;
    // -0.0 would print with a sign
    if r == 0.0 { 0.0 } else { r }
}

/// Always one digit after the decimal point: `1.8 -> "1.8"`, `2.0 -> "2.0"`.
/// Non-finite input renders as `"0.0"`.
pub fn format_fixed1(x: f64) -> String {
    if !x.is_finite() {
        return "0.0".to_string();
    }
    format!("{:.1}", round_half_up_1(x))
}

/// Whole numbers (within `1e-9`) without a fraction, everything else with one decimal:
/// `5.0 -> "5"`, `5.04 -> "5.0"`, `5.06 -> "5.1"`. Non-finite input renders as `"0"`.
pub fn format_adaptive(x: f64) -> String {
    if !x.is_finite() {
        return "0".to_string();
    }
    if (x - x.round()).abs() < WHOLE_TOLERANCE {
        let whole = x.round();
        format!("{:.0}", if whole == 0.0 { 0.0 } else { whole })
    } else {
        format!("{:.1}", round_half_up_1(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed1_keeps_one_decimal() {
        assert_eq!(format_fixed1(1.8), "1.8");
        assert_eq!(format_fixed1(2.0), "2.0");
        assert_eq!(format_fixed1(0.0), "0.0");
        assert_eq!(format_fixed1(3.25), "3.3");
    }

    #[test]
    fn adaptive_drops_fraction_for_whole_numbers() {
        assert_eq!(format_adaptive(5.0), "5");
        assert_eq!(format_adaptive(100.0), "100");
        assert_eq!(format_adaptive(7000.000_000_000_2), "7000");
    }

    #[test]
    fn adaptive_shows_one_decimal_otherwise() {
        assert_eq!(format_adaptive(5.04), "5.0");
        assert_eq!(format_adaptive(5.06), "5.1");
        assert_eq!(format_adaptive(0.25), "0.3");
        assert_eq!(format_adaptive(4.96), "5.0");
    }

    #[test]
    fn non_finite_renders_as_zero() {
        assert_eq!(format_fixed1(f64::NAN), "0.0");
        assert_eq!(format_fixed1(f64::INFINITY), "0.0");
        assert_eq!(format_adaptive(f64::NEG_INFINITY), "0");
        assert_eq!(format_adaptive(f64::NAN), "0");
    }

    #[test]
    fn tiny_negatives_do_not_print_a_sign() {
        assert_eq!(format_fixed1(-0.01), "0.0");
        assert_eq!(format_adaptive(-1e-12), "0");
    }
}
