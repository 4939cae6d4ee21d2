//! Build the Node bridge and install it.
//!
//! The run is linear: build with cargo, find the library cargo produced,
//! copy it to the output directory under its Node platform name. The first
//! failing step ends the run; nothing is retried or rolled back.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::artifact::{candidates, CARGO_PACKAGE, LIBRARY_STEM};
use crate::core::options::BridgeOptions;
use crate::util::diagnostic::BridgeError;
use crate::util::fs::{copy_file, ensure_dir, is_readable_file};
use crate::util::process::{CommandRunner, ProcessBuilder};
use crate::util::shell::{Shell, Status};

/// Environment variable cargo reads its target directory from.
pub const TARGET_DIR_ENV: &str = "CARGO_BUILD_TARGET_DIR";

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeOutput {
    /// Library cargo built
    pub source: PathBuf,
    /// Installed copy
    pub destination: PathBuf,
    /// Bytes copied
    pub size: u64,
}

/// Build, locate and install the bridge library.
pub fn build_bridge(
    opts: &BridgeOptions,
    runner: &dyn CommandRunner,
    shell: &Shell,
) -> Result<BridgeOutput> {
    run_cargo(opts, runner, shell)?;

    let source = find_library(&opts.libs_in())?;

    let destination = opts.destination();
    shell.status(
        Status::Copying,
        format!("{} to {}", source.display(), destination.display()),
    );
    let size = install_library(&source, opts.out_dir(), &destination)?;

    Ok(BridgeOutput {
        source,
        destination,
        size,
    })
}

/// The cargo invocation for `opts`.
pub fn build_command(opts: &BridgeOptions) -> ProcessBuilder {
    let mut cmd = ProcessBuilder::new(opts.cargo()).args(["build", "-p", CARGO_PACKAGE]);
    if opts.configuration().is_release() {
        cmd = cmd.arg("--release");
    }
    cmd.env(TARGET_DIR_ENV, opts.cargo_build_dir())
}

/// Run cargo and wait for it. Any unsuccessful exit is fatal.
pub fn run_cargo(opts: &BridgeOptions, runner: &dyn CommandRunner, shell: &Shell) -> Result<()> {
    let cmd = build_command(opts);
    let command = cmd.display_command();

    shell.status(Status::Running, format!("'{}'", command));
    tracing::debug!(
        "{}={}",
        TARGET_DIR_ENV,
        opts.cargo_build_dir().display()
    );

    let status = runner.run(&cmd).map_err(|e| BridgeError::SpawnFailed {
        command: command.clone(),
        reason: format!("{:#}", e),
    })?;

    if !status.success() {
        tracing::debug!("cargo exited with {:?}", status.code());
        return Err(BridgeError::CargoFailed {
            command,
            code: status.code(),
        }
        .into());
    }

    Ok(())
}

/// First readable library in `libs_in`, trying the `.dll`, `.so` and
/// `.dylib` names in that order.
pub fn find_library(libs_in: &Path) -> Result<PathBuf, BridgeError> {
    let candidates = candidates(libs_in, LIBRARY_STEM);

    for candidate in &candidates {
        if is_readable_file(candidate) {
            tracing::debug!("found {}", candidate.display());
            return Ok(candidate.clone());
        }
        tracing::debug!("not found: {}", candidate.display());
    }

    Err(BridgeError::artifact_not_found(libs_in, &candidates))
}

/// Copy `source` to `destination`, creating `out_dir` first.
fn install_library(source: &Path, out_dir: &Path, destination: &Path) -> Result<u64> {
    ensure_dir(out_dir)?;
    copy_file(source, destination)
}
