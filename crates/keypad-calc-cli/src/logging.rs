//! Logging setup
//!
//! `RUST_LOG` wins over the `-v`/`-q` flags. The interactive keypad owns the
//! terminal, so it only logs when a log file is given.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{CliConfig, LogFormat, Verbosity};
use crate::error::{CliError, CliResult};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error
    Stderr,
    /// Append to a file
    File(&'a Path),
    /// Logging is off
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Target for one-shot commands: the log file if given, else stderr
    #[must_use]
    pub fn for_batch(log_file: Option<&'a Path>) -> Self {
        log_file.map_or(Self::Stderr, Self::File)
    }

    /// Target for the interactive keypad: the log file or nothing
    #[must_use]
    pub fn for_interactive(log_file: Option<&'a Path>) -> Self {
        log_file.map_or(Self::Disabled, Self::File)
    }
}

/// Builds the event filter from `RUST_LOG`, falling back to the verbosity
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Opens a log file for appending, creating it if needed
pub fn open_log_file(path: &Path) -> CliResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::logging(format!("cannot open {}: {e}", path.display())))
}

/// Installs the global subscriber
pub fn init_logging(config: &CliConfig, target: LogTarget<'_>) -> CliResult<()> {
    let (writer, ansi) = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => (
            BoxMakeWriter::new(std::io::stderr),
            config.color.should_color_stderr(),
        ),
        LogTarget::File(path) => (BoxMakeWriter::new(Mutex::new(open_log_file(path)?)), false),
    };

    let registry = tracing_subscriber::registry().with(env_filter(config.verbosity));
    let result = match config.log_format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(writer).with_ansi(ansi))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(writer).with_ansi(false))
            .try_init(),
    };
    result.map_err(|e| CliError::logging(e.to_string()))
}
