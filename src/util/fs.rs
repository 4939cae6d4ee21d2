//! Filesystem utilities.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};

/// Whether `path` is a regular file this process can open for reading.
pub fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}

/// Ensure a directory exists, creating it and any parents if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Copy the bytes of `src` to `dst`, replacing `dst` if it exists.
///
/// Returns the number of bytes copied.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    fs::copy(src, dst)
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_readable_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("libsignal_node.so");
        fs::write(&file, b"\x7fELF").unwrap();

        assert!(is_readable_file(&file));
        assert!(!is_readable_file(&tmp.path().join("missing.so")));
        // Directories never count, even with a library-looking name.
        let dir = tmp.path().join("signal_node.dll");
        fs::create_dir(&dir).unwrap();
        assert!(!is_readable_file(&dir));
    }

    #[test]
    fn test_ensure_dir_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("build").join("Release");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call is a no-op.
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_copy_file_overwrites() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.so");
        let dst = tmp.path().join("dst.node");
        fs::write(&src, b"new contents").unwrap();
        fs::write(&dst, b"old contents that are longer").unwrap();

        let copied = copy_file(&src, &dst).unwrap();
        assert_eq!(copied, 12);
        assert_eq!(fs::read(&dst).unwrap(), b"new contents");
    }

    #[test]
    fn test_copy_file_missing_source() {
        let tmp = TempDir::new().unwrap();
        let err = copy_file(&tmp.path().join("nope.so"), &tmp.path().join("out.node")).unwrap_err();
        assert!(err.to_string().contains("failed to copy"));
    }
}
