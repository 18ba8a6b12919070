//! # cppstarter
//!
//! Scaffolds C++ projects and forwards common build targets to `make`.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` and configuration (file + env + defaults).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Build the [`OutputManager`] and the command table.
//! 4. Dispatch on the first argument.
//! 5. Print the outcome message and exit with its code.
//!
//! ## Exit codes
//!
//! | Code  | Meaning                                   |
//! |-------|-------------------------------------------|
//! |  0    | Success                                   |
//! |  1    | Usage, validation, I/O or config error    |
//! |  N    | Build tool exited with N                  |
//! | 127   | Build tool could not be started           |

use std::process::ExitCode;

use tracing::debug;

use crate::{
    config::AppConfig,
    dispatch::{CommandTable, ExitOutcome, Session, dispatch},
    error::CliError,
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod dispatch;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    let config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::from(e);
            return ExitOutcome::with_message(err.exit_code(), err.format_plain(false)).emit();
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let output = OutputManager::new(&config);

    let mut argv = std::env::args_os();
    let program = argv
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cppstarter".to_string());
    let args = match cli::utf8_args(argv) {
        Ok(args) => args,
        Err(err) => {
            err.log();
            return ExitOutcome::with_message(err.exit_code(), output.render_error(&err)).emit();
        }
    };
    debug!(?args, "CLI started");

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            let err = CliError::Io {
                message: "Could not read the current directory".into(),
                source: e,
            };
            err.log();
            return ExitOutcome::with_message(err.exit_code(), output.render_error(&err)).emit();
        }
    };

    let session = Session {
        config,
        output,
        cwd,
    };
    let table = CommandTable::standard();

    let outcome = dispatch(&table, &session, &program, &args);
    debug!(code = outcome.code, "Finished");
    outcome.emit()
}
