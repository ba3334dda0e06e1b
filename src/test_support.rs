//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A throwaway directory tree for snapshot and navigation tests.
/// Removed from disk when dropped.
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty file. Intermediate directories must already exist.
    pub fn file(&self, name: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, b"").expect("create file");
        path
    }

    /// Create a file with the given contents.
    pub fn file_with(&self, name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("create file");
        path
    }

    pub fn dir(&self, name: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path).expect("create dir");
        path
    }

    /// Create a file with the owner-executable bit set.
    #[cfg(unix)]
    pub fn executable(&self, name: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = self.file(name);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("set permissions");
        path
    }

    /// Create a symlink named `link` pointing at `target` (relative to the tree).
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, link: &str) -> std::path::PathBuf {
        let link_path = self.dir.path().join(link);
        std::os::unix::fs::symlink(self.dir.path().join(target), &link_path)
            .expect("create symlink");
        link_path
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}
