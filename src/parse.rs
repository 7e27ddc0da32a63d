//! Locale-tolerant number parsing for free-form form fields.
//!
//! Accepts `"1.71"`, `"1,71"` and `" 1 234,5 "` alike: all whitespace is treated as a
//! thousands separator and dropped, then the first decimal comma becomes a point.
//! Anything that does not parse completely to a finite number is `NotANumber`.
use tracing::trace;

/// Outcome of parsing a text field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    /// A finite number.
    Value(f64),
    /// Empty, absent, malformed or non-finite input.
    NotANumber,
}

impl ParsedNumber {
    pub fn value(self) -> Option<f64> {
        match self {
            ParsedNumber::Value(v) => Some(v),
            ParsedNumber::NotANumber => None,
        }
    }

    /// The value, only if it is strictly positive.
    pub fn positive(self) -> Option<f64> {
        self.value().filter(|v| *v > 0.0)
    }

    pub fn is_nan(self) -> bool {
        matches!(self, ParsedNumber::NotANumber)
    }
}

/// Parse a text field into a number.
pub fn parse_number(input: &str) -> ParsedNumber {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = compact.replacen(',', ".", 1);

    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => ParsedNumber::Value(v),
        _ => {
            trace!(input, "rejected numeric input");
            ParsedNumber::NotANumber
        }
    }
}

/// Parse a field that may be absent.
pub fn parse_optional(input: Option<&str>) -> ParsedNumber {
    input.map_or(ParsedNumber::NotANumber, parse_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_point_and_comma() {
        assert_eq!(parse_number("1.71"), ParsedNumber::Value(1.71));
        assert_eq!(parse_number("1,71"), ParsedNumber::Value(1.71));
    }

    #[test]
    fn strips_thousands_spaces() {
        assert_eq!(parse_number(" 1 234,5 "), ParsedNumber::Value(1234.5));
        assert_eq!(parse_number("1\u{a0}234,5"), ParsedNumber::Value(1234.5));
        assert_eq!(parse_number("1\u{202f}000"), ParsedNumber::Value(1000.0));
    }

    #[test]
    fn empty_and_blank_are_nan() {
        assert!(parse_number("").is_nan());
        assert!(parse_number("   \t").is_nan());
        assert!(parse_optional(None).is_nan());
    }

    #[test]
    fn no_numeric_prefix_escapes() {
        assert!(parse_number("12abc").is_nan());
        assert!(parse_number("5%").is_nan());
    }

    #[test]
    fn only_first_comma_is_converted() {
        assert!(parse_number("1,234,5").is_nan());
        assert!(parse_number("1.234,5").is_nan());
    }

    #[test]
    fn non_finite_is_nan() {
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("1e400").is_nan());
    }

    #[test]
    fn positive_filters_zero_and_negative() {
        assert_eq!(parse_number("0").positive(), None);
        assert_eq!(parse_number("-3").positive(), None);
        assert_eq!(parse_number("3").positive(), Some(3.0));
    }
}
