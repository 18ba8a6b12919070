//! In-memory [`Filesystem`] used by tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use cppstarter_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ScaffoldResult,
};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File { content: String, executable: bool },
}

#[derive(Debug, Default)]
struct Tree {
    nodes: BTreeMap<PathBuf, Node>,
    /// Paths that reject every create or write.
    failing: BTreeSet<PathBuf>,
}

impl Tree {
    fn ensure_writable(&self, path: &Path) -> ScaffoldResult<()> {
        if self.failing.contains(path) {
            return Err(fs_error(path, "Permission denied"));
        }
        Ok(())
    }
}

/// Filesystem held entirely in memory.
///
/// Clones share one tree, so a test keeps a handle while the service owns
/// another. [`MemoryFilesystem::fail_on`] simulates a full disk or a
/// read-only entry at a single path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    tree: Arc<RwLock<Tree>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        if let Ok(mut tree) = self.tree.write() {
            tree.failing.insert(path.into());
        }
    }

    pub fn read_file(&self, path: &Path) -> Option<String> {
        match self.read()?.nodes.get(path)? {
            Node::File { content, .. } => Some(content.clone()),
            Node::Dir => None,
        }
    }

    pub fn is_executable(&self, path: &Path) -> bool {
        self.read()
            .is_some_and(|t| matches!(t.nodes.get(path), Some(Node::File { executable: true, .. })))
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .is_some_and(|t| matches!(t.nodes.get(path), Some(Node::Dir)))
    }

    /// Every file path, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|t| {
                t.nodes
                    .iter()
                    .filter(|(_, node)| matches!(node, Node::File { .. }))
                    .map(|(path, _)| path.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn read(&self) -> Option<RwLockReadGuard<'_, Tree>> {
        self.tree.read().ok()
    }

    fn write(&self) -> ScaffoldResult<RwLockWriteGuard<'_, Tree>> {
        Ok(self
            .tree
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }
}

fn fs_error(path: &Path, reason: &str) -> cppstarter_core::error::ScaffoldError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut tree = self.write()?;
        let ancestors: Vec<&Path> = path
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .collect();

        for dir in ancestors.into_iter().rev() {
            tree.ensure_writable(dir)?;
            if matches!(tree.nodes.get(dir), Some(Node::File { .. })) {
                return Err(fs_error(dir, "Not a directory"));
            }
            tree.nodes.entry(dir.to_path_buf()).or_insert(Node::Dir);
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut tree = self.write()?;
        tree.ensure_writable(path)?;

        let parent_missing = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .is_some_and(|p| !matches!(tree.nodes.get(p), Some(Node::Dir)));
        if parent_missing {
            return Err(fs_error(path, "Parent directory does not exist"));
        }
        if matches!(tree.nodes.get(path), Some(Node::Dir)) {
            return Err(fs_error(path, "Is a directory"));
        }

        let executable = matches!(tree.nodes.get(path), Some(Node::File { executable: true, .. }));
        tree.nodes.insert(
            path.to_path_buf(),
            Node::File {
                content: content.to_owned(),
                executable,
            },
        );
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> ScaffoldResult<()> {
        let mut tree = self.write()?;
        match tree.nodes.get_mut(path) {
            Some(Node::File { executable: flag, .. }) => {
                *flag = executable;
                Ok(())
            }
            _ => Err(fs_error(path, "No such file")),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.read().is_some_and(|t| t.nodes.contains_key(path))
    }

    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        self.write()?.nodes.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b/c")).unwrap();
        assert!(fs.is_dir(Path::new("a")));
        assert!(fs.is_dir(Path::new("a/b")));
        assert!(fs.exists(Path::new("a/b/c")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("x/y.txt"), "hi").is_err());
        fs.create_dir_all(Path::new("x")).unwrap();
        fs.write_file(Path::new("x/y.txt"), "hi").unwrap();
        assert_eq!(fs.read_file(Path::new("x/y.txt")).as_deref(), Some("hi"));
    }

    #[test]
    fn directory_under_a_file_is_rejected() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("Demo"), "").unwrap();
        let err = fs.create_dir_all(Path::new("Demo/src")).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
    }

    #[test]
    fn failing_path_rejects_writes() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("p")).unwrap();
        fs.fail_on("p/Makefile");
        let err = fs.write_file(Path::new("p/Makefile"), "all:").unwrap_err();
        assert!(err.to_string().contains("Permission denied"));
        assert!(!fs.exists(Path::new("p/Makefile")));
    }

    #[test]
    fn rewrite_keeps_executable_bit() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("min.sh"), "a").unwrap();
        fs.set_permissions(Path::new("min.sh"), true).unwrap();
        fs.write_file(Path::new("min.sh"), "b").unwrap();
        assert!(fs.is_executable(Path::new("min.sh")));
        assert_eq!(fs.read_file(Path::new("min.sh")).as_deref(), Some("b"));
    }

    #[test]
    fn remove_dir_all_drops_subtree_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("keep")).unwrap();
        fs.create_dir_all(Path::new("gone/src")).unwrap();
        fs.write_file(Path::new("gone/src/main.cpp"), "").unwrap();

        fs.remove_dir_all(Path::new("gone")).unwrap();

        assert!(!fs.exists(Path::new("gone")));
        assert!(!fs.exists(Path::new("gone/src")));
        assert!(fs.list_files().is_empty());
        assert!(fs.exists(Path::new("keep")));
    }

    #[test]
    fn set_permissions_on_missing_file_fails() {
        let fs = MemoryFilesystem::new();
        assert!(fs.set_permissions(Path::new("min.sh"), true).is_err());
    }
}
