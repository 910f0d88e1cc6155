//! Common test utilities for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use fspath::FsPath;
use tempfile::TempDir;

/// A temporary directory tree that is removed on drop.
pub struct Fixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl Fixture {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Root of the fixture.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Root of the fixture as an [`FsPath`].
    pub fn root_path(&self) -> FsPath {
        to_fs_path(self.root())
    }

    /// Writes `contents` to `relative`, creating parent directories.
    pub fn file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        fs::write(&path, contents).expect("failed to write fixture file");
        path
    }

    /// Creates directory `relative` and its parents.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(&path).expect("failed to create fixture dir");
        path
    }

    /// Creates symbolic link `relative` pointing at `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, relative: &str) -> PathBuf {
        let link = self.root().join(relative);
        std::os::unix::fs::symlink(target, &link).expect("failed to create symlink");
        link
    }
}

/// Converts a UTF-8 std path into an [`FsPath`].
pub fn to_fs_path(path: &Path) -> FsPath {
    FsPath::from(path.to_str().expect("temp paths are UTF-8"))
}
