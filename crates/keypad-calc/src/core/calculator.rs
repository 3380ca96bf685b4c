//! Session wrapper that owns the current engine state

use crate::core::{transition, CalcError, CalcResult, EngineState, Token};

/// What the presentation layer shows after a key press
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    /// Text to display verbatim
    pub display: String,
    /// Error raised by this key press, if any
    pub error: Option<CalcError>,
}

impl Output {
    /// Returns true if the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == crate::core::Display::ERROR_TEXT
    }
}

/// Calculator session: one engine state, replaced on every key press
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: EngineState,
}

impl Calculator {
    /// Creates a calculator in the startup state
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: EngineState::new(),
        }
    }

    /// Resumes a session from a saved state
    #[must_use]
    pub fn with_state(state: EngineState) -> Self {
        Self { state }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display_text()
    }

    /// Applies one key press
    pub fn apply_token(&mut self, token: Token) -> Output {
        let step = transition(&self.state, token);
        self.state = step.state;
        Output {
            display: self.state.display_text().to_string(),
            error: step.error,
        }
    }

    /// Applies a key press given by its button caption
    ///
    /// Unknown captions are rejected without touching the state.
    pub fn apply_label(&mut self, label: &str) -> CalcResult<Output> {
        let token = label.parse::<Token>()?;
        Ok(self.apply_token(token))
    }

    /// Applies a sequence of tokens, returning the output of each
    pub fn apply_all(&mut self, tokens: impl IntoIterator<Item = Token>) -> Vec<Output> {
        tokens.into_iter().map(|t| self.apply_token(t)).collect()
    }

    /// Returns to the startup state
    pub fn reset(&mut self) {
        self.state = EngineState::new();
    }
}
