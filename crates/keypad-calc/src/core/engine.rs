//! Input/accumulator state machine
//!
//! [`transition`] is a pure function from the current [`EngineState`] and one
//! [`Token`] to the next state. Nothing is mutated in place, so any state can
//! be kept as a snapshot and replayed.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    format_number, parse_display, CalcError, CalcResult, Digit, Operation, Token,
};

/// What the display currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Display {
    /// A numeric literal, either typed or formatted from a result
    Entry(String),
    /// The error marker
    Error,
}

impl Display {
    /// Text shown while in the error state
    pub const ERROR_TEXT: &'static str = "Error";

    fn zero() -> Self {
        Self::Entry("0".to_string())
    }

    fn number(value: f64) -> Self {
        Self::Entry(format_number(value))
    }

    /// Returns the text to render
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Entry(text) => text,
            Self::Error => Self::ERROR_TEXT,
        }
    }

    /// Returns true if the error marker is shown
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Reads the shown value as a number
    pub fn value(&self) -> CalcResult<f64> {
        parse_display(self.text())
    }
}

impl std::fmt::Display for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Complete calculator state between two key presses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    display: Display,
    pending_operand: Option<f64>,
    pending_operator: Option<Operation>,
    awaiting_fresh_entry: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// Startup state: display `0`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: Display::zero(),
            pending_operand: None,
            pending_operator: None,
            awaiting_fresh_entry: false,
        }
    }

    /// Initial state except that the display shows the error marker
    fn errored() -> Self {
        Self {
            display: Display::Error,
            ..Self::new()
        }
    }

    /// Applies one token, see [`transition`]
    #[must_use]
    pub fn apply(&self, token: Token) -> Step {
        transition(self, token)
    }

    /// Returns the display
    #[must_use]
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Returns the display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.display.text()
    }

    /// Returns true if the error marker is shown
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.display.is_error()
    }

    /// Returns the stored first operand
    #[must_use]
    pub const fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    /// Returns the selected operator awaiting its second operand
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operation> {
        self.pending_operator
    }

    /// Returns true if the next digit starts a new number
    #[must_use]
    pub const fn awaiting_fresh_entry(&self) -> bool {
        self.awaiting_fresh_entry
    }

    /// Describes the operation in progress, e.g. `12 ×`
    #[must_use]
    pub fn pending_expression(&self) -> Option<String> {
        match (self.pending_operand, self.pending_operator) {
            (Some(a), Some(op)) => Some(format!("{} {op}", format_number(a))),
            _ => None,
        }
    }
}

/// Result of applying one token
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// The state after the token
    pub state: EngineState,
    /// The error raised by the token, if any
    pub error: Option<CalcError>,
}

impl Step {
    fn ok(state: EngineState) -> Self {
        Self { state, error: None }
    }

    fn failed(state: EngineState, error: CalcError) -> Self {
        Self {
            state,
            error: Some(error),
        }
    }
}

/// Computes the state that follows `state` when `token` is pressed
#[must_use]
pub fn transition(state: &EngineState, token: Token) -> Step {
    let step = match token {
        Token::Equals => equals(state),
        Token::Operator(op) => operator(state, op),
        Token::AllClear => Step::ok(EngineState::new()),
        Token::Negate => unary(state, false, |v| Ok(-v)),
        Token::Percent => unary(state, false, |v| Ok(v / 100.0)),
        Token::SquareRoot => unary(state, true, |v| {
            if v < 0.0 {
                Err(CalcError::DomainError { value: v })
            } else {
                Ok(v.sqrt())
            }
        }),
        Token::Decimal => Step::ok(decimal(state)),
        Token::Digit(d) => Step::ok(digit(state, d)),
    };

    debug!(
        token = %token,
        display = step.state.display_text(),
        awaiting = step.state.awaiting_fresh_entry,
        "applied token"
    );
    if let Some(err) = &step.error {
        warn!(token = %token, kind = err.kind(), error = %err, "calculation error");
    }
    step
}

/// Reads the display as operand B and applies the pending operation
fn resolve(a: f64, op: Operation, display: &Display) -> CalcResult<f64> {
    let b = display.value()?;
    op.apply(a, b)
}

fn equals(state: &EngineState) -> Step {
    let (Some(a), Some(op)) = (state.pending_operand, state.pending_operator) else {
        return Step::ok(state.clone());
    };
    match resolve(a, op, &state.display) {
        Ok(result) => Step::ok(EngineState {
            display: Display::number(result),
            pending_operand: Some(result),
            pending_operator: None,
            awaiting_fresh_entry: true,
        }),
        Err(err) => binary_failure(state, err),
    }
}

/// Shows the error marker, clearing the pending operation when the error
/// calls for it
fn binary_failure(state: &EngineState, err: CalcError) -> Step {
    let next = if err.resets_state() {
        EngineState::errored()
    } else {
        EngineState {
            display: Display::Error,
            ..state.clone()
        }
    };
    Step::failed(next, err)
}

fn operator(state: &EngineState, next: Operation) -> Step {
    let (display, operand) = match (state.pending_operand, state.pending_operator) {
        (Some(a), Some(op)) if !state.awaiting_fresh_entry => {
            match resolve(a, op, &state.display) {
                Ok(result) => (Display::number(result), result),
                Err(err) => return binary_failure(state, err),
            }
        }
        // First operator, or the operator is replaced before a second operand
        _ => match state.display.value() {
            Ok(value) => (state.display.clone(), value),
            Err(err) => return binary_failure(state, err),
        },
    };
    Step::ok(EngineState {
        display,
        pending_operand: Some(operand),
        pending_operator: Some(next),
        awaiting_fresh_entry: true,
    })
}

/// Replaces the display with `f(value)`; failures only touch the display
fn unary(
    state: &EngineState,
    ends_entry: bool,
    f: impl FnOnce(f64) -> CalcResult<f64>,
) -> Step {
    match state.display.value().and_then(f) {
        Ok(value) => Step::ok(EngineState {
            display: Display::number(value),
            awaiting_fresh_entry: ends_entry || state.awaiting_fresh_entry,
            ..state.clone()
        }),
        Err(err) => Step::failed(
            EngineState {
                display: Display::Error,
                ..state.clone()
            },
            err,
        ),
    }
}

fn decimal(state: &EngineState) -> EngineState {
    let display = match &state.display {
        _ if starts_fresh(state) => Display::Entry("0.".into()),
        Display::Entry(text) if !text.contains('.') => Display::Entry(format!("{text}.")),
        _ => return state.clone(),
    };
    EngineState {
        display,
        awaiting_fresh_entry: false,
        ..state.clone()
    }
}

fn digit(state: &EngineState, d: Digit) -> EngineState {
    let ch = d.as_char();
    let display = match &state.display {
        Display::Entry(text) if !starts_fresh(state) && text != "0" => {
            Display::Entry(format!("{text}{ch}"))
        }
        _ => Display::Entry(ch.to_string()),
    };
    EngineState {
        display,
        awaiting_fresh_entry: false,
        ..state.clone()
    }
}

/// Entry replaces the display after a result, an operator, or an error
const fn starts_fresh(state: &EngineState) -> bool {
    state.awaiting_fresh_entry || state.display.is_error()
}
