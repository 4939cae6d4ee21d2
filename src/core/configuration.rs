//! Build configuration (cargo profile) selection.

use std::fmt;
use std::str::FromStr;

use crate::util::diagnostic::BridgeError;

/// Build profile for the native addon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Configuration {
    /// Optimized build, `cargo build --release`
    #[default]
    Release,
    /// Unoptimized build with debug info
    Debug,
}

impl Configuration {
    /// Name as the host build system spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Configuration::Release => "Release",
            Configuration::Debug => "Debug",
        }
    }

    /// Subdirectory of the cargo target dir holding this profile's output.
    pub fn profile_dir(&self) -> &'static str {
        match self {
            Configuration::Release => "release",
            Configuration::Debug => "debug",
        }
    }

    /// Whether cargo needs `--release`.
    pub fn is_release(&self) -> bool {
        matches!(self, Configuration::Release)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Configuration {
    type Err = BridgeError;

    /// Parse a configuration name. Surrounding `"` are ignored; the match is
    /// case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = strip_quotes(s);
        match value {
            "Release" => Ok(Configuration::Release),
            "Debug" => Ok(Configuration::Debug),
            _ => Err(BridgeError::UnknownConfiguration {
                value: value.to_string(),
            }),
        }
    }
}

/// Trim `"` characters from both ends of a value.
///
/// The host build system on Windows hands values over still wrapped in the
/// quotes it used on its own command line.
pub fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"')
}
