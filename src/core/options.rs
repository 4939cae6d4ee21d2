//! Validated options for one bridge build.

use std::path::{Path, PathBuf};

use crate::core::artifact::{destination_file_name, normalize_os_name};
use crate::core::configuration::{strip_quotes, Configuration};
use crate::util::diagnostic::BridgeError;

/// Default cargo target directory.
pub const DEFAULT_CARGO_BUILD_DIR: &str = "target";

/// Default build program.
pub const DEFAULT_CARGO: &str = "cargo";

/// Option values as they arrive from the command line, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub out_dir: Option<String>,
    pub configuration: String,
    pub os_name: Option<String>,
    pub cargo_build_dir: String,
    pub cargo: Option<PathBuf>,
}

/// Everything a bridge build needs, fixed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeOptions {
    configuration: Configuration,
    os_name: String,
    out_dir: PathBuf,
    cargo_build_dir: PathBuf,
    cargo: PathBuf,
}

impl BridgeOptions {
    /// Create options with default directories.
    pub fn new(configuration: Configuration, os_name: impl AsRef<str>) -> Self {
        BridgeOptions {
            configuration,
            os_name: normalize_os_name(strip_quotes(os_name.as_ref())).to_string(),
            out_dir: default_out_dir(configuration),
            cargo_build_dir: PathBuf::from(DEFAULT_CARGO_BUILD_DIR),
            cargo: PathBuf::from(DEFAULT_CARGO),
        }
    }

    /// Validate raw command-line values.
    ///
    /// The configuration is checked before the OS name, so a run with both
    /// wrong reports the configuration.
    pub fn from_raw(raw: RawOptions) -> Result<Self, BridgeError> {
        let configuration: Configuration = raw.configuration.parse()?;

        let os_name = raw
            .os_name
            .ok_or(BridgeError::MissingOption { flag: "--os-name" })?;

        let mut opts = BridgeOptions::new(configuration, os_name);

        if let Some(out_dir) = raw.out_dir {
            let out_dir = strip_quotes(&out_dir);
            if !out_dir.is_empty() {
                opts = opts.with_out_dir(out_dir);
            }
        }

        opts = opts.with_cargo_build_dir(raw.cargo_build_dir);

        if let Some(cargo) = raw.cargo {
            opts = opts.with_cargo(cargo);
        }

        Ok(opts)
    }

    /// Set the destination directory.
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Set the cargo target directory.
    pub fn with_cargo_build_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cargo_build_dir = dir.into();
        self
    }

    /// Set the build program.
    pub fn with_cargo(mut self, cargo: impl Into<PathBuf>) -> Self {
        self.cargo = cargo.into();
        self
    }

    pub fn configuration(&self) -> Configuration {
        self.configuration
    }

    /// Node OS name, quotes and `..\` prefix already removed.
    pub fn os_name(&self) -> &str {
        &self.os_name
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn cargo_build_dir(&self) -> &Path {
        &self.cargo_build_dir
    }

    pub fn cargo(&self) -> &Path {
        &self.cargo
    }

    /// Directory cargo writes this configuration's libraries to.
    pub fn libs_in(&self) -> PathBuf {
        self.cargo_build_dir.join(self.configuration.profile_dir())
    }

    /// Full path of the installed addon.
    pub fn destination(&self) -> PathBuf {
        self.out_dir.join(destination_file_name(&self.os_name))
    }
}

/// `build/<Configuration>`.
fn default_out_dir(configuration: Configuration) -> PathBuf {
    Path::new("build").join(configuration.as_str())
}
