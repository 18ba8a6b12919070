//! Application ports (traits) for external dependencies.
//!
//! Ports define interfaces that the application needs from the outside
//! world. Adapters in `cppstarter-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template retrieval
//!   - `CommandRunner`: Subprocess execution (`git`, `make`)
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The CLI calls the services directly)

pub mod output;

pub use output::{CommandRunner, Filesystem, TemplateStore};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem, MockTemplateStore};
