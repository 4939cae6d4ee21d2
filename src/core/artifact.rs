//! Naming of the built library and of its installed copy.

use std::path::{Path, PathBuf};

/// Cargo package that builds the addon.
pub const CARGO_PACKAGE: &str = "libsignal-node";

/// Library name the package produces, without platform decoration.
pub const LIBRARY_STEM: &str = "signal_node";

/// Parent-directory prefix the Windows host build sometimes leaves on the OS name.
const RELATIVE_PARENT_PREFIX: &str = "..\\";

/// Shared library naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryStyle {
    /// `name.dll`
    Windows,
    /// `libname.so`
    Linux,
    /// `libname.dylib`
    MacOs,
}

impl LibraryStyle {
    /// Search order. Every style is tried regardless of the host, so a
    /// cross-compiled library is still picked up.
    pub const SEARCH_ORDER: [LibraryStyle; 3] =
        [LibraryStyle::Windows, LibraryStyle::Linux, LibraryStyle::MacOs];

    /// File prefix for this convention.
    pub fn prefix(&self) -> &'static str {
        match self {
            LibraryStyle::Windows => "",
            LibraryStyle::Linux | LibraryStyle::MacOs => "lib",
        }
    }

    /// File extension for this convention.
    pub fn extension(&self) -> &'static str {
        match self {
            LibraryStyle::Windows => "dll",
            LibraryStyle::Linux => "so",
            LibraryStyle::MacOs => "dylib",
        }
    }

    /// Decorate a library stem, e.g. `signal_node` -> `libsignal_node.so`.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}{}.{}", self.prefix(), stem, self.extension())
    }
}

/// Candidate paths for `stem` inside `dir`, in search order.
pub fn candidates(dir: &Path, stem: &str) -> Vec<PathBuf> {
    LibraryStyle::SEARCH_ORDER
        .iter()
        .map(|style| dir.join(style.file_name(stem)))
        .collect()
}

/// File name the addon is installed under for a Node OS name.
pub fn destination_file_name(os_name: &str) -> String {
    format!("libsignal_client_{}.node", os_name)
}

/// Drop a leading `..\` from an OS name.
pub fn normalize_os_name(os_name: &str) -> &str {
    os_name
        .strip_prefix(RELATIVE_PARENT_PREFIX)
        .unwrap_or(os_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(LibraryStyle::Windows.file_name(LIBRARY_STEM), "signal_node.dll");
        assert_eq!(LibraryStyle::Linux.file_name(LIBRARY_STEM), "libsignal_node.so");
        assert_eq!(LibraryStyle::MacOs.file_name(LIBRARY_STEM), "libsignal_node.dylib");
    }

    #[test]
    fn test_candidates_follow_search_order() {
        let dir = Path::new("target").join("release");
        let found = candidates(&dir, LIBRARY_STEM);
        assert_eq!(
            found,
            vec![
                dir.join("signal_node.dll"),
                dir.join("libsignal_node.so"),
                dir.join("libsignal_node.dylib"),
            ]
        );
    }

    #[test]
    fn test_destination_file_name() {
        assert_eq!(destination_file_name("linux"), "libsignal_client_linux.node");
        assert_eq!(destination_file_name("win32"), "libsignal_client_win32.node");
    }

    #[test]
    fn test_normalize_os_name() {
        assert_eq!(normalize_os_name("..\\foo"), "foo");
        assert_eq!(normalize_os_name("darwin"), "darwin");
        // Only one prefix is removed, and only at the start.
        assert_eq!(normalize_os_name("..\\..\\foo"), "..\\foo");
        assert_eq!(normalize_os_name("foo..\\"), "foo..\\");
        assert_eq!(normalize_os_name("../foo"), "../foo");
    }
}
