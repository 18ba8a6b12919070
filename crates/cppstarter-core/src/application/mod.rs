//! Application layer for cppstarter.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, BuildService, PromptService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but holds no template
//! content and performs no I/O itself.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BuildService, FailurePolicy, PromptService, ScaffoldReport, ScaffoldService, StepKind,
    StepOutcome, StepStatus,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem, TemplateStore};

pub use error::ApplicationError;
