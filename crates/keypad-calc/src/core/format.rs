//! Conversions between display text and numbers

use crate::core::{CalcError, CalcResult};

/// Formats a computed value for the display
///
/// Integral values are written without a fractional part (`2`, not `2.0`).
/// Everything else uses the shortest decimal text that reads back to the same
/// `f64`, which never uses exponent notation. Negative zero is shown as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Reads display text back as a number
pub fn parse_display(text: &str) -> CalcResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::format(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integral() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(12.0), "12");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.25), "-0.25");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_large_integral_has_no_exponent() {
        assert_eq!(format_number(1e15), "1000000000000000");
        assert_eq!(format_number(1e21), "1000000000000000000000");
        assert_eq!(format_number(2_147_483_648.0), "2147483648");
    }

    #[test]
    fn test_format_small_fraction_has_no_exponent() {
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(1e-7), "0.0000001");
    }

    #[test]
    fn test_format_float_noise_kept() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_parse_display_numbers() {
        assert_eq!(parse_display("0"), Ok(0.0));
        assert_eq!(parse_display("3."), Ok(3.0));
        assert_eq!(parse_display("0.5"), Ok(0.5));
        assert_eq!(parse_display("-12.75"), Ok(-12.75));
    }

    #[test]
    fn test_parse_display_error_marker() {
        assert_eq!(parse_display("Error"), Err(CalcError::format("Error")));
    }

    #[test]
    fn test_parse_display_rejects_non_finite() {
        assert!(parse_display("inf").is_err());
        assert!(parse_display("NaN").is_err());
        assert!(parse_display("").is_err());
    }

    #[test]
    fn test_format_parse_roundtrip_fraction() {
        for value in [0.1, 1.0 / 3.0, -7.125, 123_456.789] {
            assert_eq!(parse_display(&format_number(value)), Ok(value));
        }
    }
}
