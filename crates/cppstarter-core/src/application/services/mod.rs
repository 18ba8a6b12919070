//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the three things the tool does: scaffold a project, forward a build
//! target, and write the prompt script.

pub mod build_service;
pub mod prompt_service;
pub mod scaffold_service;

pub use build_service::{BuildService, DEFAULT_BUILD_TOOL};
pub use prompt_service::PromptService;
pub use scaffold_service::{
    FailurePolicy, ScaffoldReport, ScaffoldService, StepKind, StepOutcome, StepStatus,
};
