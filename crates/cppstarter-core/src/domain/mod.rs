//! Domain layer: project names, the scaffold plan, template rendering and
//! build targets.
//!
//! Nothing here touches the filesystem or spawns processes. Template content
//! and all I/O come in through the ports in [`crate::application::ports`].

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    project_spec::{ProjectName, ProjectSpec},
    project_structure::{Entry, ProjectStructure, RelativePath},
    template::{PROJECT_NAME, RenderContext, SCAFFOLD_DIRECTORIES, Template, TemplateId},
};

pub use error::DomainError;

pub use value_objects::{BuildTarget, Invocation};
