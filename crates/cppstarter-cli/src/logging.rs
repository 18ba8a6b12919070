//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `cppstarter-core` only *emits*
//! spans and events.
//!
//! # Level resolution
//!
//! | Setting                 | Filter level   |
//! |-------------------------|----------------|
//! | (none)                  | ERROR          |
//! | `log.level = "<level>"` | that level     |
//! | `output.quiet = true`   | ERROR          |
//!
//! Warnings that matter to the user are printed by the command handlers, so
//! the default filter keeps the log stream silent on ordinary failures.
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

const DEFAULT_LEVEL: &str = "error";

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Initialise the global tracing subscriber.
///
/// Must be called once, before any tracing macros fire.
pub fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let level = derive_level(config);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "cppstarter={level},cppstarter_core={level},cppstarter_adapters={level}"
        ))
    });

    let use_ansi = !config.output.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Resolve the filter level from config. Unknown level names fall back to
/// the default.
fn derive_level(config: &AppConfig) -> &'static str {
    if config.output.quiet {
        return "error";
    }
    config
        .log
        .level
        .as_deref()
        .map(str::to_ascii_lowercase)
        .and_then(|wanted| LEVELS.into_iter().find(|l| *l == wanted))
        .unwrap_or(DEFAULT_LEVEL)
}

/// `true` when the configured level shows debug detail; used to decide
/// whether errors print their cause chain.
pub fn is_verbose(config: &AppConfig) -> bool {
    matches!(derive_level(config), "debug" | "trace")
}
