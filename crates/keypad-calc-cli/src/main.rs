//! keypad-calc: pocket calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc tui                       # Interactive keypad
//! keypad-calc eval 1 2 × 3 =            # Prints 36
//! keypad-calc eval --trace "5 ÷ 0 ="    # One line per press
//! keypad-calc keys                      # Keypad layout and aliases
//! ```

use clap::Parser;
use keypad_calc_cli::{
    handlers::{execute_eval, execute_keys, execute_tui},
    init_logging, Cli, CliConfig, CliResult, Commands, LogTarget, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let mut config = build_config(&cli);
    console::set_colors_enabled(config.color.should_color());

    match cli.command {
        Commands::Tui(args) => {
            if let Some(path) = args.log_file {
                config = config.with_log_file(path);
            }
            init_logging(&config, LogTarget::for_interactive(config.log_file.as_deref()))?;
            execute_tui()
        }
        Commands::Eval(args) => {
            if let Some(path) = &args.log_file {
                config = config.with_log_file(path);
            }
            init_logging(&config, LogTarget::for_batch(config.log_file.as_deref()))?;
            execute_eval(&config, &args)
        }
        Commands::Keys => {
            init_logging(&config, LogTarget::Stderr)?;
            execute_keys(&config);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        Verbosity::from_count(cli.verbose)
    };

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.into())
        .with_log_format(cli.log_format.into())
}
