//! Node bridge builder - builds the libsignal Node addon with cargo
//!
//! This crate provides the library side of `build_node_bridge`: option
//! validation, the cargo invocation, and locating and installing the
//! shared library it produces.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides a mock command runner and helpers for fake build output.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{BridgeOptions, Configuration, RawOptions};
pub use ops::build_bridge::{build_bridge, BridgeOutput};
pub use util::diagnostic::BridgeError;
