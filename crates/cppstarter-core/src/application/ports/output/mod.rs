//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cppstarter-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Invocation, Template, TemplateId};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cppstarter_adapters::filesystem::LocalFilesystem` (production)
/// - `cppstarter_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, truncating any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> ScaffoldResult<()>;

    /// Check if any filesystem entry exists at path.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()>;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `cppstarter_adapters::template_store::EmbeddedStore` (built-in templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get the template registered under `id`.
    fn get(&self, id: TemplateId) -> ScaffoldResult<Template>;
}

/// Port for spawning external programs.
///
/// Implemented by:
/// - `cppstarter_adapters::process::SystemRunner` (production)
/// - `cppstarter_adapters::process::ScriptedRunner` (testing)
///
/// Stdout and stderr of the child are passed through unchanged; the exit
/// code is the only signal returned. There is no timeout.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run to completion and return the exit code.
    ///
    /// `Err` only when the program could not be started at all.
    fn run(&self, invocation: &Invocation) -> ScaffoldResult<i32>;
}
