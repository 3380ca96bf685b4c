//! Terminal front-end: a clickable keypad over the calculator engine

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonGroup, FocusMove, Keypad, KeypadButton, KeypadWidget};
pub use ui::{layout, render, CalculatorLayout, CalculatorUI};
