//! Unified calculator driver
//!
//! The same key-press checks run against the bare engine and against
//! the TUI adapter, so both front-ends are held to identical behaviour.

// The verify_* functions are assertions and panic like tests do
#![allow(clippy::unwrap_used, clippy::panic)]

use crate::core::{CalcResult, Calculator, Token};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses the button with the given caption
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Gets the current display text
    fn get_display(&self) -> String;

    /// Gets the pending operation, if any (e.g. `12 ×`)
    fn get_pending(&self) -> Option<String>;

    /// Returns to the startup state
    fn clear(&mut self);

    /// Presses a whitespace-separated sequence of captions
    fn press_sequence(&mut self, labels: &str) -> CalcResult<()> {
        for label in labels.split_whitespace() {
            self.press(label)?;
        }
        Ok(())
    }
}

/// Driver that talks to the engine directly
#[derive(Debug, Default)]
pub struct EngineDriver {
    calculator: Calculator,
}

impl EngineDriver {
    /// Creates a new engine driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        self.calculator.apply_label(label).map(|_| ())
    }

    fn get_display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn get_pending(&self) -> Option<String> {
        self.calculator.state().pending_expression()
    }

    fn clear(&mut self) {
        self.calculator.reset();
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcResult, CalculatorDriver};
    use crate::core::{CalcError, Token};
    use crate::tui::CalculatorApp;

    /// Driver that presses keypad buttons on the TUI app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, label: &str) -> CalcResult<()> {
            // Go through the keypad so the button lookup is exercised too
            let token = label.parse::<Token>()?;
            let index = self
                .app
                .keypad()
                .find_button_by_token(token)
                .ok_or_else(|| CalcError::unknown_token(label))?;
            self.app.press_button(index);
            Ok(())
        }

        fn get_display(&self) -> String {
            self.app.display().to_string()
        }

        fn get_pending(&self) -> Option<String> {
            self.app.calculator().state().pending_expression()
        }

        fn clear(&mut self) {
            self.app.press(Token::AllClear);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified verification suites =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four binary operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("2 + 3 =", "5"),
        ("1 0 - 4 =", "6"),
        ("6 × 7 =", "42"),
        ("6 ÷ 3 =", "2"),
        ("7 ÷ 2 =", "3.5"),
    ] {
        driver.clear();
        driver.press_sequence(keys).unwrap();
        assert_eq!(driver.get_display(), expected, "keys: {keys}");
    }
    driver.clear();
}

/// Verifies chaining and operator replacement
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("3 + 4 +").unwrap();
    assert_eq!(driver.get_display(), "7");
    assert_eq!(driver.get_pending().as_deref(), Some("7 +"));
    driver.press_sequence("5 =").unwrap();
    assert_eq!(driver.get_display(), "12");

    driver.clear();
    driver.press_sequence("3 + × 5 =").unwrap();
    assert_eq!(driver.get_display(), "15");

    driver.clear();
    driver.press_sequence("2 + 3 = + 4 =").unwrap();
    assert_eq!(driver.get_display(), "9");
    driver.clear();
}

/// Verifies error display and recovery
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("5 ÷ 0 =").unwrap();
    assert_eq!(driver.get_display(), "Error");
    assert_eq!(driver.get_pending(), None);
    driver.press("7").unwrap();
    assert_eq!(driver.get_display(), "7");

    driver.clear();
    driver.press_sequence("1 + 4 +/- √").unwrap();
    assert_eq!(driver.get_display(), "Error");
    assert_eq!(driver.get_pending().as_deref(), Some("1 +"));
    driver.clear();
}

/// Verifies the unary functions
pub fn verify_unary_functions<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("5 0 %").unwrap();
    assert_eq!(driver.get_display(), "0.5");

    driver.clear();
    driver.press_sequence("1 2 . 5 +/- +/-").unwrap();
    assert_eq!(driver.get_display(), "12.5");

    driver.clear();
    driver.press_sequence("1 6 √").unwrap();
    assert_eq!(driver.get_display(), "4");

    driver.press_sequence("AC AC").unwrap();
    assert_eq!(driver.get_display(), "0");
    assert_eq!(driver.get_pending(), None);
}

/// Verifies digit and decimal entry
pub fn verify_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("0 0 3 . . 1").unwrap();
    assert_eq!(driver.get_display(), "3.1");

    driver.clear();
    driver.press_sequence("2 + 3 = 8").unwrap();
    assert_eq!(driver.get_display(), "8");
    driver.clear();
}

/// Runs every verification suite
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_error_recovery(driver);
    verify_unary_functions(driver);
    verify_entry(driver);
}

/// Feeds every keypad token once; used as a smoke check by drivers
pub fn press_every_button<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    for token in Token::ALL {
        driver.press(token.label())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;

    // ===== Engine driver =====

    #[test]
    fn test_engine_driver_new() {
        let driver = EngineDriver::new();
        assert_eq!(driver.get_display(), "0");
        assert_eq!(driver.calculator().display(), "0");
    }

    #[test]
    fn test_engine_driver_unknown_label() {
        let mut driver = EngineDriver::new();
        assert!(matches!(
            driver.press("^"),
            Err(CalcError::UnknownToken { .. })
        ));
    }

    #[test]
    fn test_engine_driver_press_sequence_stops_on_error() {
        let mut driver = EngineDriver::new();
        assert!(driver.press_sequence("1 bogus 2").is_err());
        assert_eq!(driver.get_display(), "1");
    }

    #[test]
    fn test_engine_full_suite() {
        let mut driver = EngineDriver::new();
        run_full_suite(&mut driver);
    }

    #[test]
    fn test_engine_press_every_button() {
        let mut driver = EngineDriver::new();
        press_every_button(&mut driver).unwrap();
    }

    // ===== TUI driver =====

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;
        use crate::tui::CalculatorApp;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new();
            assert_eq!(driver.get_display(), "0");
        }

        #[test]
        fn test_tui_driver_with_app() {
            let mut app = CalculatorApp::new();
            app.press(Token::digit(9).unwrap());
            let driver = TuiDriver::with_app(app);
            assert_eq!(driver.get_display(), "9");
            assert_eq!(driver.app().display(), "9");
        }

        #[test]
        fn test_tui_driver_press_highlights() {
            let mut driver = TuiDriver::new();
            driver.press("×").unwrap();
            let focused = driver.app().keypad().focused_button().unwrap();
            assert_eq!(focused.label(), "×");
            assert!(focused.pressed);
        }

        #[test]
        fn test_tui_driver_app_mut() {
            let mut driver = TuiDriver::new();
            driver.app_mut().quit();
            assert!(driver.app().should_quit());
        }

        #[test]
        fn test_tui_driver_alias_label() {
            let mut driver = TuiDriver::new();
            driver.press_sequence("6 * 7 =").unwrap();
            assert_eq!(driver.get_display(), "42");
        }

        #[test]
        fn test_tui_full_suite() {
            let mut driver = TuiDriver::new();
            run_full_suite(&mut driver);
        }

        #[test]
        fn test_drivers_agree_on_every_button() {
            let mut engine = EngineDriver::new();
            let mut tui = TuiDriver::new();
            press_every_button(&mut engine).unwrap();
            press_every_button(&mut tui).unwrap();
            assert_eq!(engine.get_display(), tui.get_display());
            assert_eq!(engine.get_pending(), tui.get_pending());
        }
    }
}
