//! TUI application state
//!
//! Thin adapter between terminal events and the calculator engine: every
//! button activation becomes exactly one [`Token`].

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::{FocusMove, Keypad};
use super::ui;
use crate::core::{CalcResult, Calculator, Output, Token};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    /// Output of the most recent key press
    last_output: Option<Output>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new app with a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new())
    }

    /// Creates an app around an existing calculator session
    #[must_use]
    pub fn with_calculator(calculator: Calculator) -> Self {
        Self {
            calculator,
            keypad: Keypad::new(),
            last_output: None,
            should_quit: false,
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Returns true if the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.calculator.state().is_error()
    }

    /// Returns the output of the most recent key press
    #[must_use]
    pub fn last_output(&self) -> Option<&Output> {
        self.last_output.as_ref()
    }

    /// Returns the calculator session
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Sends a token to the calculator and highlights its button
    pub fn press(&mut self, token: Token) -> Output {
        debug!(label = token.label(), "keypad button pressed");
        self.keypad.highlight_token(token);
        let output = self.calculator.apply_token(token);
        self.last_output = Some(output.clone());
        output
    }

    /// Presses the button at a keypad index and moves the focus there
    pub fn press_button(&mut self, index: usize) -> Option<Output> {
        let token = self.keypad.get_button(index)?.token;
        self.keypad.set_focus(index);
        Some(self.press(token))
    }

    /// Presses the button with the given caption
    pub fn press_label(&mut self, label: &str) -> CalcResult<Output> {
        let token = label.parse::<Token>()?;
        Ok(self.press(token))
    }

    /// Presses the focused button
    pub fn press_focused(&mut self) -> Option<Output> {
        self.press_button(self.keypad.focus())
    }

    /// Moves the keypad focus and clears the pressed highlight
    pub fn move_focus(&mut self, direction: FocusMove) {
        self.keypad.release_all();
        self.keypad.move_focus(direction);
    }

    /// Presses whatever button lies under a click inside the keypad area
    pub fn click(&mut self, keypad_area: Rect, column: u16, row: u16) -> Option<Output> {
        let index = self.keypad.hit_test(keypad_area, column, row)?;
        self.press_button(index)
    }

    /// Applies an input action; `frame_area` is the full terminal area used
    /// to locate the keypad for mouse clicks
    pub fn handle_action(&mut self, action: KeyAction, frame_area: Rect) -> Option<Output> {
        match action {
            KeyAction::Focus(direction) => {
                self.move_focus(direction);
                None
            }
            KeyAction::PressFocused => self.press_focused(),
            KeyAction::Click { column, row } => {
                let keypad_area = ui::layout(frame_area).keypad;
                self.click(keypad_area, column, row)
            }
            KeyAction::Quit => {
                self.quit();
                None
            }
            KeyAction::None => None,
        }
    }

    /// Text for the status line: the last error, or the pending operation
    #[must_use]
    pub fn status_line(&self) -> String {
        if let Some(Output {
            error: Some(err), ..
        }) = &self.last_output
        {
            return err.to_string();
        }
        self.calculator
            .state()
            .pending_expression()
            .unwrap_or_default()
    }
}
