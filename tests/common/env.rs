//! Test environment for running the librarian binary in isolation.
//!
//! Each `TestEnv` owns a project directory (the working directory) and a
//! home directory that stands in for `HOME`, config and data dirs.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Result of running a librarian CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory for the binary
    pub project_root: TempDir,
    /// Stand-in for HOME
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_librarian")),
        }
    }

    /// Store file inside the project directory
    pub fn store_path(&self) -> PathBuf {
        self.project_root.path().join("books.toml")
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative: &str, content: &str) {
        std::fs::write(self.project_path(relative), content).expect("Failed to write file");
    }

    /// Run with `--store` pointing at this environment's store file
    pub fn run(&self, args: &[&str]) -> TestResult {
        let store = self.store_path();
        let mut full_args = vec!["--store", store.to_str().unwrap()];
        full_args.extend_from_slice(args);
        self.run_raw(&full_args, &[])
    }

    /// Run exactly the given arguments with extra env vars
    pub fn run_raw(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let home = self.home_dir.path();
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("XDG_DATA_HOME", home.join(".local/share"))
            .env_remove("LIBRARIAN_STORE")
            .env_remove("LIBRARIAN_BACKEND")
            .env_remove("LIBRARIAN_EVENTS")
            .env_remove("LIBRARIAN_MAX_ID_ATTEMPTS")
            .env_remove("LIBRARIAN_LOG")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute librarian");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Add a book and return its id
    pub fn add(&self, title: &str, isbn: &str) -> String {
        let result = self.run(&["--json", "add", "--title", title, "--isbn", isbn]);
        assert!(result.is_success(), "add failed:\n{}", result.combined_output());
        result.json()["book_id"].as_str().unwrap().to_string()
    }
}
