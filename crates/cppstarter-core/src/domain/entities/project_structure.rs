use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Path below a project root. Never absolute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.has_root() || path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}

/// One step of a scaffold plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Directory { path: RelativePath },
    File { path: RelativePath, content: String },
}

impl Entry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::Directory { path } | Self::File { path, .. } => path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }
}

/// Rendered project, ready to be written below `root`.
///
/// Entries keep insertion order; the scaffold service adds directories before
/// files so every file's parent exists by the time it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    root: PathBuf,
    entries: Vec<Entry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.entries.push(Entry::Directory { path });
    }

    pub fn add_file(&mut self, path: RelativePath, content: impl Into<String>) {
        self.entries.push(Entry::File {
            path,
            content: content.into(),
        });
    }

    /// Rejects a plan that names the same path twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = BTreeSet::new();
        match self.entries.iter().find(|e| !seen.insert(e.path())) {
            Some(dup) => Err(DomainError::DuplicatePath {
                path: dup.path().to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered file contents, in write order.
    pub fn file_contents(&self) -> impl Iterator<Item = (&RelativePath, &str)> {
        self.entries.iter().filter_map(|e| match e {
            Entry::File { path, content } => Some((path, content.as_str())),
            Entry::Directory { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(p: &str) -> RelativePath {
        RelativePath::try_new(p).unwrap()
    }

    #[test]
    fn absolute_paths_are_rejected() {
        let absolute = if cfg!(windows) { "C:\\tmp\\x" } else { "/tmp/x" };
        assert!(matches!(
            RelativePath::try_new(absolute),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn nested_relative_path_is_kept() {
        assert_eq!(rel("src/main.cpp").as_path(), Path::new("src/main.cpp"));
    }

    #[test]
    fn same_path_twice_is_rejected() {
        let mut structure = ProjectStructure::new("demo");
        structure.add_directory(rel("src"));
        structure.add_file(rel("README.md"), "a");
        structure.add_file(rel("README.md"), "b");

        let err = structure.validate().unwrap_err();
        assert_eq!(err.to_string(), "Duplicate path in project structure: README.md");
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut structure = ProjectStructure::new("demo");
        structure.add_directory(rel("src"));
        structure.add_file(rel("src/main.cpp"), "x");

        assert!(structure.validate().is_ok());
        assert_eq!(structure.len(), 2);
        assert!(structure.entries()[0].is_directory());
        let files: Vec<_> = structure.file_contents().collect();
        assert_eq!(files, vec![(&rel("src/main.cpp"), "x")]);
    }
}
