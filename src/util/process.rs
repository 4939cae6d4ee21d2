//! Subprocess execution utilities.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

/// Builder for subprocess execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    env: BTreeMap<String, String>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Set an environment variable. Everything else is inherited.
    pub fn env(mut self, key: impl AsRef<str>, value: impl AsRef<OsStr>) -> Self {
        self.env.insert(
            key.as_ref().to_string(),
            value.as_ref().to_string_lossy().into_owned(),
        );
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    /// Get the arguments.
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Get an environment override, if one is set.
    pub fn get_env(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    /// Replace the program, keeping arguments and environment.
    pub fn with_program(mut self, program: impl AsRef<Path>) -> Self {
        self.program = program.as_ref().to_path_buf();
        self
    }

    /// Build the Command. Stdio is inherited.
    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run to completion and return how it ended.
    pub fn status(&self) -> Result<RunStatus> {
        let mut cmd = self.build_command();
        let status = cmd
            .status()
            .with_context(|| format!("failed to execute `{}`", self.program.display()))?;
        Ok(RunStatus::from_code(status.code()))
    }

    /// Display the command for messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    code: Option<i32>,
}

impl RunStatus {
    /// Status from an exit code; `None` means the child was killed by a signal.
    pub fn from_code(code: Option<i32>) -> Self {
        RunStatus { code }
    }

    /// Exit code 0.
    pub fn ok() -> Self {
        RunStatus { code: Some(0) }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Something that can run a command to completion.
pub trait CommandRunner {
    /// Run `cmd`, blocking until it exits.
    fn run(&self, cmd: &ProcessBuilder) -> Result<RunStatus>;
}

/// Runs commands as real child processes with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, cmd: &ProcessBuilder) -> Result<RunStatus> {
        let program = resolve_program(cmd.get_program())?;
        tracing::debug!("resolved `{}` to {}", cmd.get_program().display(), program.display());
        cmd.clone().with_program(program).status()
    }
}

/// Resolve a program name through PATH. Paths with a directory part are
/// checked as given.
pub fn resolve_program(program: &Path) -> Result<PathBuf> {
    which::which(program)
        .with_context(|| format!("could not find `{}` in PATH", program.display()))
}
