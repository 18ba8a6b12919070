//! Infrastructure adapters for cppstarter.
//!
//! This crate implements the ports defined in `cppstarter-core::application::ports`.
//! It contains all I/O: the local disk, child processes, and the template
//! text compiled into the binary.

pub mod filesystem;
pub mod process;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ScriptedRunner, SystemRunner};
pub use template_store::EmbeddedStore;
