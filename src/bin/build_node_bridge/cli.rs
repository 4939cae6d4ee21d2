//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use node_bridge_builder::core::options::{DEFAULT_CARGO_BUILD_DIR, RawOptions};
use node_bridge_builder::util::shell::{ColorChoice, Shell};

/// Build the libsignal Node addon and copy it into place
#[derive(Parser, Debug)]
#[command(name = "build_node_bridge")]
#[command(author, version, about, long_about = None)]
#[command(args_override_self = true, infer_long_args = true)]
pub struct Cli {
    /// Destination directory (default build/$CONFIGURATION)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out_dir: Option<String>,

    /// Build configuration (Release or Debug)
    #[arg(long, value_name = "C", default_value = "Release")]
    pub configuration: String,

    /// Node OS name
    #[arg(long, value_name = "OS")]
    pub os_name: Option<String>,

    /// Cargo build dir
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CARGO_BUILD_DIR)]
    pub cargo_build_dir: String,

    /// Cargo executable
    #[arg(long, value_name = "PATH", env = "CARGO")]
    pub cargo: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    /// Positional arguments are accepted and ignored
    #[arg(hide = true, value_name = "IGNORED")]
    pub leftovers: Vec<String>,
}

impl Cli {
    /// Shell configured from the output flags.
    pub fn shell(&self) -> Shell {
        Shell::from_flags(self.quiet, self.color)
    }

    /// Option values for validation.
    pub fn into_raw(self) -> RawOptions {
        RawOptions {
            out_dir: self.out_dir,
            configuration: self.configuration,
            os_name: self.os_name,
            cargo_build_dir: self.cargo_build_dir,
            cargo: self.cargo,
        }
    }
}
