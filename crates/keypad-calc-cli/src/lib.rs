//! keypad-calc CLI library
//!
//! Argument parsing, configuration, logging and the command handlers behind
//! the `keypad-calc` binary.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, LogFormatArg, TuiArgs};
pub use config::{CliConfig, ColorChoice, LogFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::{init_logging, LogTarget};
