//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared for isolation.
const FSPATH_ENV: [&str; 5] = [
    "FSPATH_CONFIG_DIR",
    "FSPATH_LOG_MODE",
    "FSPATH_OUTPUT_FORMAT",
    "FSPATH_SORT_ENTRIES",
    "FSPATH_SHOW_HIDDEN",
];

/// Test environment with an isolated working and config directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for commands
    pub work_dir: PathBuf,
    /// User configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().join("work");
        let config_dir = temp_dir.path().join("config");
        fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            work_dir,
            config_dir,
        }
    }

    /// Command with no environment isolation beyond a clean `FSPATH_*` set.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("fspath").expect("Failed to find fspath binary");
        for key in FSPATH_ENV {
            cmd.env_remove(key);
        }
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Command running in the work dir with the config dir pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Working directory path.
    pub fn path(&self) -> &Path {
        &self.work_dir
    }

    /// Write a file under the work dir, creating parents.
    pub fn create_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a directory under the work dir.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, yaml: &str) {
        fs::write(self.config_dir.join("config.yaml"), yaml).expect("Failed to write config");
    }

    /// Write a project configuration file in the work dir.
    pub fn write_project_config(&self, yaml: &str) {
        self.create_file(".fspath.yaml", yaml);
    }
}
