//! High-level operations.

pub mod build_bridge;

pub use build_bridge::{build_bridge, build_command, find_library, BridgeOutput};
