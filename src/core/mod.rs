//! Core data structures.
//!
//! - Build configuration (Release / Debug)
//! - Library naming conventions and the installed file name
//! - Validated options for a run

pub mod artifact;
pub mod configuration;
pub mod options;

pub use artifact::LibraryStyle;
pub use configuration::Configuration;
pub use options::{BridgeOptions, RawOptions};
