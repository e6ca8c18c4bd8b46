// tests/common/mod.rs
//! Shared helpers for driving the `arxiv_gate` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

const STUB_SCRIPT: &str = r#"#!/bin/sh
for arg in "$@"; do
    printf '%s\n' "$arg" >> "$STUB_LOG"
done
exit "${STUB_EXIT:-0}"
"#;

/// Temporary workspace with a fake container runtime that logs its arguments.
pub struct StubRuntime {
    dir: TempDir,
}

#[allow(dead_code)]
impl StubRuntime {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp workspace");
        let stub = dir.path().join("fake-runtime");
        fs::write(&stub, STUB_SCRIPT).expect("write stub runtime");
        make_executable(&stub);
        Self { dir }
    }

    /// Working directory for the gate; relative output paths land here.
    pub fn workdir(&self) -> &Path {
        self.dir.path()
    }

    /// Physical path of the working directory, as the child process sees it.
    pub fn resolved_workdir(&self) -> PathBuf {
        self.dir.path().canonicalize().expect("canonicalize workdir")
    }

    pub fn runtime(&self) -> PathBuf {
        self.dir.path().join("fake-runtime")
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    /// Arguments received across all runtime calls, one entry per argument.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Raw log bytes, for arguments that are not valid UTF-8.
    pub fn raw_calls(&self) -> Vec<u8> {
        fs::read(self.log_path()).unwrap_or_default()
    }

    pub fn was_invoked(&self) -> bool {
        self.log_path().exists()
    }

    /// Gate command wired to the stub, exiting with `exit_code`.
    pub fn command(&self, exit_code: i32) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_arxiv_gate"));
        cmd.current_dir(self.workdir())
            .env_remove("ARXIV_GATE_IMAGE")
            .env_remove("ARXIV_GATE_CONTAINER_NAME")
            .env_remove("ARXIV_GATE_LOG")
            .env("ARXIV_GATE_RUNTIME", self.runtime())
            .env("STUB_LOG", self.log_path())
            .env("STUB_EXIT", exit_code.to_string());
        cmd
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).expect("stub metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("chmod stub");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
