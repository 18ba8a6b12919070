pub mod project_spec;
pub mod project_structure;
pub mod template;

pub use project_spec::{ProjectName, ProjectSpec};
pub use project_structure::{Entry, ProjectStructure, RelativePath};
pub use template::{RenderContext, Template, TemplateId};
