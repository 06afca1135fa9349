//! Common test utilities for treemenu CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working directory plus helpers to run the binary
//! - `TestResult`: captured exit status and output
//! - Item builders shared by scenario tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;
use treemenu::MenuItem;

/// Result of running a treemenu CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Isolated test environment.
///
/// The binary runs inside a temp directory with HOME and the XDG config dir
/// pointed into it, so no user config leaks into a test.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_treemenu")),
        }
    }

    /// Environment with the demo store and config already written
    pub fn seeded() -> Self {
        let env = Self::new();
        let result = env.run(&["seed", "--with-config"]);
        assert!(result.success, "seed failed: {}", result.stderr);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create directories");
        }
        std::fs::write(&path, content).expect("failed to write file");
        path
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let home = self.path(".home");
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("TREEMENU_STORE")
            .env_remove("TREEMENU_ROOT_CLASS")
            .env_remove("TREEMENU_LOG_FORMAT")
            .env_remove("TREEMENU_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        TestResult::from_output(cmd.output().expect("failed to execute treemenu"))
    }
}

/// Root item with a literal address
pub fn root(id: u64, menu: &str, title: &str, url: &str) -> MenuItem {
    MenuItem::new(id, menu, title).with_url(url)
}

/// Child item with a literal address
pub fn child(id: u64, parent: u64, menu: &str, title: &str, url: &str) -> MenuItem {
    MenuItem::new(id, menu, title).with_parent(parent).with_url(url)
}
