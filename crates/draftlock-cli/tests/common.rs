//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("draftlock");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// Fixture with a config written before the first command runs.
    pub fn with_config(lock_duration_ms: i64, tick_interval_ms: u64, max_documents: usize) -> Self {
        let fixture = Self::new();
        fs::create_dir_all(&fixture.data_dir).expect("Failed to create data dir");
        fs::write(
            fixture.data_dir.join("config.toml"),
            format!(
                "lock_duration_ms = {}\ntick_interval_ms = {}\nmax_documents = {}\n",
                lock_duration_ms, tick_interval_ms, max_documents
            ),
        )
        .expect("Failed to write config");
        fixture
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("draftlock").expect("binary exists");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.env_remove("DRAFTLOCK_PATH");
        cmd.timeout(Duration::from_secs(30));
        cmd
    }

    /// Create a document and return its full id.
    pub fn create_doc(&self, content: &str) -> String {
        let output = self
            .command()
            .args(["doc", "new", content, "--format", "json"])
            .output()
            .expect("doc new runs");
        assert!(output.status.success(), "doc new failed: {:?}", output);
        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("doc new emits JSON");
        json["id"].as_str().expect("id field").to_string()
    }

    pub fn doc_list_json(&self) -> serde_json::Value {
        let output = self
            .command()
            .args(["doc", "list", "--format", "json"])
            .output()
            .expect("doc list runs");
        assert!(output.status.success(), "doc list failed: {:?}", output);
        serde_json::from_slice(&output.stdout).expect("doc list emits JSON")
    }

    pub fn status_json(&self) -> serde_json::Value {
        let output = self
            .command()
            .args(["status", "--format", "json"])
            .output()
            .expect("status runs");
        assert!(output.status.success(), "status failed: {:?}", output);
        serde_json::from_slice(&output.stdout).expect("status emits JSON")
    }
}

/// Pull the confirmation phrase out of `mode edit` output.
pub fn phrase_from_output(stdout: &str) -> String {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Confirmation phrase: "))
        .expect("output contains a confirmation phrase")
        .to_string()
}
