#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding one workspace file. Commands run inside it
/// with every connector-related variable cleared, so nothing reaches the
/// network unless a test points the edge function somewhere explicitly.
pub struct TestWorkspace {
    pub dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("ideaboard.json")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("ideaboard").expect("ideaboard binary not found");
        cmd.current_dir(self.dir.path())
            .env_remove("IDEABOARD_WORKSPACE")
            .env_remove("SUPABASE_PROJECT_ID")
            .env_remove("SUPABASE_ANON_KEY")
            .env_remove("IDEABOARD__CONNECTORS__EDGE_FUNCTION__BASE_URL")
            .env_remove("RUST_LOG")
            .arg("--workspace")
            .arg(self.path());
        cmd
    }

    /// Run `project create` and return the new id.
    pub fn create_project(&self, title: &str) -> String {
        let output = self
            .cmd()
            .args(["project", "create", "--title", title])
            .output()
            .expect("Failed to run ideaboard");
        assert!(output.status.success(), "project create failed: {:?}", output);
        stdout_line(&output.stdout)
    }

    /// Run `idea add` on the current project and return the new id.
    pub fn add_idea(&self, args: &[&str]) -> String {
        let output = self
            .cmd()
            .args(["idea", "add"])
            .args(args)
            .output()
            .expect("Failed to run ideaboard");
        assert!(output.status.success(), "idea add failed: {:?}", output);
        stdout_line(&output.stdout)
    }

    pub fn snapshot(&self) -> serde_json::Value {
        read_json(&self.path())
    }
}

pub fn stdout_line(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout).trim().to_string()
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(path).expect("workspace file missing");
    serde_json::from_str(&raw).expect("workspace file is not JSON")
}
