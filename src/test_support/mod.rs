//! Test utilities for bridge builds.
//!
//! Provides a mock [`CommandRunner`] so the build pipeline can be exercised
//! without invoking cargo, plus helpers to lay out fake build output.
//!
//! # Example
//!
//! ```rust,ignore
//! use node_bridge_builder::test_support::{write_artifact, MockRunner};
//!
//! #[test]
//! fn test_example() {
//!     let runner = MockRunner::new(RunStatus::ok());
//!     write_artifact(&libs_in, "libsignal_node.so", b"\x7fELF");
//!
//!     // Run the pipeline with `&runner`...
//!     assert_eq!(runner.calls().len(), 1);
//! }
//! ```

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::util::process::{CommandRunner, ProcessBuilder, RunStatus};

/// What a [`MockRunner`] does when asked to run a command.
#[derive(Debug, Clone)]
enum MockOutcome {
    /// Pretend the command ran and ended with this status.
    Exit(RunStatus),
    /// Pretend the command could not be started.
    SpawnError(String),
}

/// Mock command runner that records every command it is given.
pub struct MockRunner {
    outcome: MockOutcome,
    calls: RefCell<Vec<ProcessBuilder>>,
    on_run: Option<Box<dyn Fn(&ProcessBuilder)>>,
}

impl MockRunner {
    /// Runner whose commands all end with `status`.
    pub fn new(status: RunStatus) -> Self {
        MockRunner {
            outcome: MockOutcome::Exit(status),
            calls: RefCell::new(Vec::new()),
            on_run: None,
        }
    }

    /// Runner whose commands all fail to start.
    pub fn spawn_error(message: impl Into<String>) -> Self {
        MockRunner {
            outcome: MockOutcome::SpawnError(message.into()),
            calls: RefCell::new(Vec::new()),
            on_run: None,
        }
    }

    /// Side effect performed for each command, before the status is
    /// returned. Use it to stand in for files the real command would write.
    pub fn on_run(mut self, hook: impl Fn(&ProcessBuilder) + 'static) -> Self {
        self.on_run = Some(Box::new(hook));
        self
    }

    /// Commands run so far, in order.
    pub fn calls(&self) -> Vec<ProcessBuilder> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, cmd: &ProcessBuilder) -> Result<RunStatus> {
        self.calls.borrow_mut().push(cmd.clone());

        match &self.outcome {
            MockOutcome::Exit(status) => {
                if let Some(hook) = &self.on_run {
                    hook(cmd);
                }
                Ok(*status)
            }
            MockOutcome::SpawnError(message) => Err(anyhow!("{}", message)),
        }
    }
}

impl fmt::Debug for MockRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockRunner")
            .field("outcome", &self.outcome)
            .field("calls", &self.calls)
            .field("on_run", &self.on_run.is_some())
            .finish()
    }
}

/// Write a fake library named `name` into `dir`, creating `dir` as needed.
pub fn write_artifact(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mock_runner_records_calls() {
        let runner = MockRunner::new(RunStatus::from_code(Some(7)));
        let cmd = ProcessBuilder::new("cargo").arg("build");

        let status = runner.run(&cmd).unwrap();
        assert_eq!(status.code(), Some(7));
        assert_eq!(runner.calls(), vec![cmd]);
    }

    #[test]
    fn test_mock_runner_spawn_error_skips_hook() {
        let runner = MockRunner::spawn_error("no such file").on_run(|_| panic!("hook ran"));

        let err = runner.run(&ProcessBuilder::new("cargo")).unwrap_err();
        assert_eq!(err.to_string(), "no such file");
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn test_write_artifact_creates_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("target").join("release");

        let path = write_artifact(&dir, "libsignal_node.so", b"lib");
        assert_eq!(path, dir.join("libsignal_node.so"));
        assert_eq!(std::fs::read(path).unwrap(), b"lib");
    }
}
