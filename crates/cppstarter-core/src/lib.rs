//! cppstarter Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the cppstarter
//! C++ project scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         cppstarter-cli (CLI)            │
//! │   (CommandTable, dispatch, handlers)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Scaffold, Build, Prompt services)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Runner)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   cppstarter-adapters (Infrastructure)  │
//! │ (LocalFilesystem, SystemRunner, etc)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cppstarter_core::{application::ScaffoldService, domain::ProjectSpec};
//!
//! let service = ScaffoldService::new(store, filesystem, runner);
//! let spec = ProjectSpec::new("Demo", false)?;
//! let report = service.generate(&spec, Path::new("."))?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuildService, FailurePolicy, PromptService, ScaffoldReport, ScaffoldService,
        ports::{CommandRunner, Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        BuildTarget, Invocation, ProjectName, ProjectSpec, ProjectStructure, RenderContext,
        Template, TemplateId,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
