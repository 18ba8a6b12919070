use thiserror::Error;

/// Broken domain rule.
///
/// Only `EmptyProjectName` can be caused by user input; the others mean a
/// built-in template or scaffold layout is wrong.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Template '{template}' has no content")]
    EmptyTemplate { template: String },

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::EmptyProjectName)
    }

    pub fn suggestions(&self) -> Vec<String> {
        if self.is_user_error() {
            return vec![
                "Pass a non-empty project name".into(),
                "Example: cppstarter new MyGame".into(),
            ];
        }
        let mut hints = Vec::with_capacity(2);
        if let Self::EmptyTemplate { template } = self {
            hints.push(format!("Built-in template '{template}' is corrupted"));
        }
        hints.push("Please report this issue".into());
        hints
    }
}
