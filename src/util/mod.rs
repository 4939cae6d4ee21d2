//! Shared utilities

pub mod args;
pub mod diagnostic;
pub mod fs;
pub mod process;
pub mod shell;

pub use args::ArgSource;
pub use diagnostic::BridgeError;
pub use process::{CommandRunner, ProcessBuilder, ProcessRunner};
pub use shell::Shell;
