//! TestWorld pattern for isolated CLI runs.
//!
//! Every world owns a temp directory holding its config file, and every
//! command runs with `WALINK_CONFIG` pointing there so the developer's real
//! configuration is never read.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walink_runtime::Config;

pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated environment with no config file yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("walink").join("config.toml");

        Self {
            temp_dir,
            config_path,
        }
    }

    /// Write `config` to this world's config path.
    pub fn with_config(self, config: &Config) -> Self {
        config
            .save_to(&self.config_path)
            .expect("Failed to write config");
        self
    }

    /// Write raw TOML, for exercising parse errors.
    pub fn with_raw_config(self, content: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, content).expect("Failed to write config");
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Build a `walink` command bound to this world.
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("walink").expect("Failed to find walink binary");
        cmd.env("WALINK_CONFIG", &self.config_path)
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let output = self.command().args(args).output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8(output.stderr)?,
        })
    }
}

/// Captured result of one CLI run.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
