use std::fmt;

use crate::domain::error::DomainError;

/// Name of the project to scaffold.
///
/// Invariant: never empty. The name doubles as the project directory, the
/// output binary name, and the README title, so it is kept verbatim
/// (no case conversion, no trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the generator needs to know about one `new` invocation.
///
/// Built from the command line, consumed once, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: ProjectName,
    init_git: bool,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>, init_git: bool) -> Result<Self, DomainError> {
        Ok(Self {
            name: ProjectName::new(name)?,
            init_git,
        })
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn init_git(&self) -> bool {
        self.init_git
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(ProjectName::new(""), Err(DomainError::EmptyProjectName));
        assert!(ProjectSpec::new("", true).is_err());
    }

    #[test]
    fn name_is_kept_verbatim() {
        let name = ProjectName::new("My Game").unwrap();
        assert_eq!(name.as_str(), "My Game");
        assert_eq!(name.to_string(), "My Game");
    }

    #[test]
    fn spec_carries_git_flag() {
        let spec = ProjectSpec::new("Demo", true).unwrap();
        assert_eq!(spec.name().as_str(), "Demo");
        assert!(spec.init_git());
    }
}
