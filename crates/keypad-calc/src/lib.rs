//! Keypad Calculator - a pocket-calculator state machine
//!
//! Button presses are modelled as [`Token`](core::Token)s. Each token drives
//! one step of a small state machine that owns the display text, a pending
//! operand and a pending operator, exactly like the keypad of a desk
//! calculator. A terminal front-end (feature `tui`, on by default) renders
//! the keypad and feeds clicks and key presses into the same engine.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for token in Token::parse_sequence("1 2 × 3 =").unwrap() {
//!     calc.apply_token(token);
//! }
//! assert_eq!(calc.display(), "36");
//!
//! // Errors are shown on the display and the engine keeps going
//! calc.apply_label("÷").unwrap();
//! calc.apply_label("0").unwrap();
//! let out = calc.apply_token(Token::Equals);
//! assert_eq!(out.display, "Error");
//! assert_eq!(out.error, Some(CalcError::DivisionByZero));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, parse_display, transition, CalcError, CalcResult, Calculator, Digit,
        Display, EngineState, Operation, Output, Step, Token,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction, Keypad};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        calc.apply_all(Token::parse_sequence("2 + 3 =").unwrap());
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_transition_direct() {
        let step = transition(&EngineState::new(), Token::digit(7).unwrap());
        assert_eq!(step.state.display_text(), "7");
        assert!(step.error.is_none());
    }

    #[test]
    fn test_operation_direct() {
        assert_eq!(Operation::Multiply.apply(6.0, 7.0).unwrap(), 42.0);
        assert_eq!(
            Operation::Divide.apply(1.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_formatting_direct() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(parse_display("12.").unwrap(), 12.0);
    }

    #[test]
    fn test_error_kinds() {
        let mut calc = Calculator::new();
        let outputs = calc.apply_all(Token::parse_sequence("9 +/- √").unwrap());
        let last = outputs.last().unwrap();
        assert!(last.is_error());
        assert!(matches!(last.error, Some(CalcError::DomainError { .. })));
    }

    #[test]
    fn test_engine_driver_from_prelude() {
        let mut driver = EngineDriver::new();
        driver.press_sequence("8 ÷ 2 =").unwrap();
        assert_eq!(driver.get_display(), "4");
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_from_prelude() {
        let mut app = CalculatorApp::new();
        app.press(Token::digit(1).unwrap());
        assert_eq!(app.display(), "1");
        assert_eq!(Keypad::new().button_count(), 20);
        assert_eq!(
            InputHandler::new().handle_event(&crossterm::event::Event::FocusLost),
            KeyAction::None
        );
    }
}
