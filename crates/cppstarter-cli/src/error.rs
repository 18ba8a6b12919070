//! Error handling for the cppstarter CLI.
//!
//! Provides structured errors with:
//! - User-facing messages in the `Error: <message>` form
//! - Actionable suggestions
//! - Error chaining for verbose output

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use cppstarter_core::error::{ErrorCategory as CoreCategory, ScaffoldError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
///
/// Every variant maps to process exit code 1; the build passthrough relays
/// child exit codes through `ExitOutcome` instead of through this type.
#[derive(Debug, Error)]
pub enum CliError {
    /// First token did not match any command.
    #[error("Unknown command '{token}'.")]
    UnknownCommand { token: String },

    /// `new` was given without a name.
    #[error("Missing project name.")]
    MissingProjectName,

    /// Arguments could not be parsed.
    #[error("{message}")]
    InvalidArguments { message: String },

    /// A configuration file or variable could not be read.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// An I/O operation performed by the CLI itself failed.
    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// An error propagated from `cppstarter-core`.
    #[error(transparent)]
    Core(#[from] ScaffoldError),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl CliError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownCommand { .. } => {
                vec!["Run 'cppstarter --help' to list the commands".into()]
            }
            Self::MissingProjectName => vec!["Example: cppstarter new MyProject".into()],
            Self::InvalidArguments { .. } => {
                vec!["Run 'cppstarter --help' for usage information".into()]
            }
            Self::Config { .. } => vec![
                "Check the file named by CPPSTARTER_CONFIG or the default config.toml".into(),
                "Check CPPSTARTER_* environment variables".into(),
            ],
            Self::Io { .. } => vec![
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
            Self::Core(core) => core.suggestions(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    /// `Error: <message>`, followed in verbose mode by the cause chain and
    /// the suggestions.
    fn render(&self, verbose: bool, color: bool) -> String {
        let mut lines = vec![if color {
            format!("{} {}", "Error:".red().bold(), self.to_string().red())
        } else {
            format!("Error: {self}")
        }];
        if !verbose {
            return lines.remove(0);
        }

        let causes = std::iter::successors(self.source(), |&e| e.source());
        for cause in causes {
            lines.push(if color {
                format!("  {} {}", "\u{2192}".dimmed(), cause.to_string().dimmed())
            } else {
                format!("  Caused by: {cause}")
            });
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let heading = "Suggestions:";
            lines.push(if color {
                heading.yellow().bold().to_string()
            } else {
                heading.to_owned()
            });
            lines.extend(suggestions.iter().map(|s| format!("  {s}")));
        }

        lines.join("\n")
    }

    fn is_user_error(&self) -> bool {
        match self {
            Self::UnknownCommand { .. } | Self::MissingProjectName | Self::InvalidArguments { .. } => {
                true
            }
            Self::Core(core) => core.category() == CoreCategory::Validation,
            Self::Config { .. } | Self::Io { .. } => false,
        }
    }

    /// Trace the error. The rendered message already reaches the user, so
    /// nothing here passes the default `error` filter.
    pub fn log(&self) {
        if self.is_user_error() {
            tracing::info!(error = %self, "User error");
        } else {
            tracing::warn!(error = %self, "Command failed");
        }
        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "Caused by");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cppstarter_core::{application::ApplicationError, domain::DomainError};
    use std::{io, path::PathBuf};

    #[test]
    fn unknown_command_names_the_token() {
        let err = CliError::UnknownCommand {
            token: "bogus".into(),
        };
        assert_eq!(err.format_plain(false), "Error: Unknown command 'bogus'.");
    }

    #[test]
    fn missing_name_message_is_exact() {
        assert_eq!(
            CliError::MissingProjectName.format_plain(false),
            "Error: Missing project name."
        );
    }

    #[test]
    fn core_errors_pass_through_unchanged() {
        let err = CliError::from(ScaffoldError::from(DomainError::EmptyProjectName));
        assert_eq!(err.to_string(), "Project name cannot be empty");

        let err = CliError::from(ScaffoldError::from(ApplicationError::ProjectExists {
            path: PathBuf::from("Demo"),
        }));
        assert_eq!(
            err.format_plain(false),
            "Error: Directory 'Demo' already exists"
        );
    }

    #[test]
    fn every_variant_exits_with_one() {
        let errors = [
            CliError::MissingProjectName,
            CliError::InvalidArguments {
                message: "x".into(),
            },
            CliError::from(io::Error::other("disk")),
        ];
        assert!(errors.iter().all(|e| e.exit_code() == 1));
    }

    #[test]
    fn user_errors_are_told_apart_from_failures() {
        assert!(CliError::MissingProjectName.is_user_error());
        assert!(!CliError::from(io::Error::other("disk")).is_user_error());
    }

    #[test]
    fn verbose_plain_includes_cause_and_suggestions() {
        let err = CliError::Io {
            message: "could not read working directory".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: gone"));
        assert!(s.contains("Suggestions:"));
        assert!(!err.format_plain(false).contains("Suggestions:"));
    }
}
