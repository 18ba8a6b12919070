//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", .path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// A subprocess could not be started at all.
    #[error("Failed to run '{command}': {reason}")]
    SpawnFailed { command: String, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Store lock poisoned")]
    StoreLockError,

    /// Project already exists at target location.
    #[error("Directory '{}' already exists", .path.display())]
    ProjectExists { path: PathBuf },

    /// Generation stopped at the first failed step (rollback policy).
    #[error("Generation aborted at {}: {reason}", .path.display())]
    Aborted { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::SpawnFailed { command, .. } => vec![
                format!("Could not start: {}", command),
                "Ensure the program is installed and in your PATH".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Choose a different project name than '{}'", path.display()),
                format!("Or remove the existing entry: rm -rf {}", path.display()),
            ],
            Self::Aborted { .. } => vec![
                "The partially created project was removed".into(),
                "Fix the reported problem and run the command again".into(),
            ],
            Self::StoreLockError => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::Aborted { .. } => ErrorCategory::Internal,
            Self::SpawnFailed { .. } => ErrorCategory::NotFound,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
