//! Error taxonomy for a bridge build.
//!
//! Every recognized failure ends the run with exit code 1. Unexpected I/O
//! failures are not part of this taxonomy; they travel as `anyhow` errors
//! with path context and end the run the same way.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Exit code for every failed run.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Broad class of a [`BridgeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing command-line input.
    Usage,
    /// The build command could not be run or did not succeed.
    ChildProcess,
    /// The build succeeded but produced no library we recognize.
    ArtifactNotFound,
}

/// A recognized, terminal failure.
#[derive(Debug, Error, Diagnostic)]
pub enum BridgeError {
    #[error("Unknown value for --configuration '{value}'")]
    #[diagnostic(
        code(bridge::usage::configuration),
        help("expected one of: Release, Debug")
    )]
    UnknownConfiguration { value: String },

    #[error("{flag} is required")]
    #[diagnostic(code(bridge::usage::missing_option))]
    MissingOption { flag: &'static str },

    #[error("{message}")]
    #[diagnostic(
        code(bridge::usage::arguments),
        help("run with --help to see the accepted options")
    )]
    InvalidArguments { message: String },

    #[error("cargo failed")]
    #[diagnostic(
        code(bridge::build::failed),
        help("the output of `{command}` above explains why")
    )]
    CargoFailed { command: String, code: Option<i32> },

    #[error("failed to run `{command}`: {reason}")]
    #[diagnostic(
        code(bridge::build::spawn),
        help("make sure cargo is installed, or point --cargo at it")
    )]
    SpawnFailed { command: String, reason: String },

    #[error("did not find generated library")]
    #[diagnostic(code(bridge::artifact::not_found))]
    ArtifactNotFound {
        searched: PathBuf,
        #[help]
        looked_for: String,
    },
}

impl BridgeError {
    /// Build an [`BridgeError::ArtifactNotFound`] naming the directory and
    /// the file names tried in it.
    pub fn artifact_not_found(searched: impl Into<PathBuf>, candidates: &[PathBuf]) -> Self {
        let searched = searched.into();
        let names: Vec<String> = candidates
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();

        let looked_for = if names.is_empty() {
            format!("looked in {}", searched.display())
        } else {
            format!("looked in {} for {}", searched.display(), names.join(", "))
        };

        BridgeError::ArtifactNotFound {
            searched,
            looked_for,
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::UnknownConfiguration { .. }
            | BridgeError::MissingOption { .. }
            | BridgeError::InvalidArguments { .. } => ErrorKind::Usage,
            BridgeError::CargoFailed { .. } | BridgeError::SpawnFailed { .. } => {
                ErrorKind::ChildProcess
            }
            BridgeError::ArtifactNotFound { .. } => ErrorKind::ArtifactNotFound,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }

    /// Help line, if the error carries one.
    pub fn help_text(&self) -> Option<String> {
        self.help().map(|h| h.to_string())
    }
}
