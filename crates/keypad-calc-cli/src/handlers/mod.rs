//! Command handlers - extracted from main.rs for testability

pub mod eval;
pub mod keys;
pub mod tui;

pub use eval::{evaluate, execute_eval, render_json, render_text, EvalReport, EvalStep};
pub use keys::{execute_keys, render_keys, ALIASES};
pub use tui::{execute_tui, run_app};
