//! Core calculator module: tokens, arithmetic and the input state machine
//!
//! Everything in here is free of presentation concerns. Front-ends feed
//! [`Token`]s into a [`Calculator`] (or call [`transition`] directly) and
//! render the returned display text.

mod calculator;
pub mod engine;
pub mod format;
mod operations;
pub mod token;

pub use calculator::{Calculator, Output};
pub use engine::{transition, Display, EngineState, Step};
pub use format::{format_number, parse_display};
pub use operations::Operation;
pub use token::{Digit, Token};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Every variant except [`CalcError::UnknownToken`] is shown to the user as
/// the literal display text `"Error"`. The variants are kept apart because
/// their recovery policies differ.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division with a zero divisor was requested
    #[error("Division by zero")]
    DivisionByZero,

    /// Square root of a negative number
    #[error("Domain error: cannot take the square root of {value}")]
    DomainError {
        /// The offending operand
        value: f64,
    },

    /// Display text could not be read as a number
    #[error("Format error: {text:?} is not a number")]
    FormatError {
        /// The text that failed to parse
        text: String,
    },

    /// A binary operation produced an infinite or NaN result
    #[error("Overflow: result is not a finite number")]
    Overflow,

    /// A label that is not one of the keypad tokens
    #[error("Unknown token: {label:?}")]
    UnknownToken {
        /// The rejected label
        label: String,
    },
}

impl CalcError {
    /// Creates a format error for the given text
    #[must_use]
    pub fn format(text: impl Into<String>) -> Self {
        Self::FormatError { text: text.into() }
    }

    /// Creates an unknown token error
    #[must_use]
    pub fn unknown_token(label: impl Into<String>) -> Self {
        Self::UnknownToken {
            label: label.into(),
        }
    }

    /// Short machine-friendly name of the error kind, used in logs and JSON output
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "division_by_zero",
            Self::DomainError { .. } => "domain_error",
            Self::FormatError { .. } => "format_error",
            Self::Overflow => "overflow",
            Self::UnknownToken { .. } => "unknown_token",
        }
    }

    /// Returns true if this error, raised while resolving a binary operation,
    /// clears the pending operand and operator.
    #[must_use]
    pub const fn resets_state(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero | Self::FormatError { .. } | Self::Overflow
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_domain() {
        let err = CalcError::DomainError { value: -4.0 };
        assert_eq!(
            err.to_string(),
            "Domain error: cannot take the square root of -4"
        );
    }

    #[test]
    fn test_calc_error_display_format() {
        let err = CalcError::format("Error");
        assert_eq!(err.to_string(), "Format error: \"Error\" is not a number");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        assert!(CalcError::Overflow.to_string().starts_with("Overflow"));
    }

    #[test]
    fn test_calc_error_display_unknown_token() {
        let err = CalcError::unknown_token("^");
        assert_eq!(err.to_string(), "Unknown token: \"^\"");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }

    #[test]
    fn test_calc_error_kind() {
        assert_eq!(CalcError::DivisionByZero.kind(), "division_by_zero");
        assert_eq!(CalcError::DomainError { value: -1.0 }.kind(), "domain_error");
        assert_eq!(CalcError::format("x").kind(), "format_error");
        assert_eq!(CalcError::Overflow.kind(), "overflow");
        assert_eq!(CalcError::unknown_token("x").kind(), "unknown_token");
    }

    #[test]
    fn test_calc_error_reset_policy() {
        assert!(CalcError::DivisionByZero.resets_state());
        assert!(CalcError::format("x").resets_state());
        assert!(CalcError::Overflow.resets_state());
        assert!(!CalcError::DomainError { value: -1.0 }.resets_state());
        assert!(!CalcError::unknown_token("x").resets_state());
    }
}
