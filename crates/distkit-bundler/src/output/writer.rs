//! File writing for distribution outputs.
//!
//! Every file is written to a sibling temporary file and renamed into place, so
//! a reader never observes a half-written bundle. Writes are independent: when
//! a later write fails, files written earlier in the run stay on disk.
//!
//! Paths handed to [`validate_output_path`] are normalized and must stay inside
//! the project root.

use std::fs;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::Serialize;
use tracing::debug;

use crate::{Error, Result};

/// A file produced by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    /// Absolute path of the written file.
    pub path: PathBuf,

    /// Size of the written content in bytes.
    pub bytes: usize,
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// # Examples
///
/// ```no_run
/// use distkit_bundler::output::writer::write_text;
/// use std::path::Path;
///
/// # fn example() -> distkit_bundler::Result<()> {
/// let written = write_text(Path::new("npm/esm/tinycolor.js"), "export default 1;\n")?;
/// assert_eq!(written.bytes, 18);
/// # Ok(())
/// # }
/// ```
pub fn write_text(path: &Path, content: &str) -> Result<WrittenFile> {
    ensure_parent_dir(path)?;

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, content).map_err(|e| {
        Error::WriteFailure(format!(
            "Failed to write temporary file '{}': {}",
            temp_path.display(),
            e
        ))
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        cleanup_temp_file(&temp_path);
        Error::WriteFailure(format!(
            "Failed to rename '{}' to '{}': {}",
            temp_path.display(),
            path.display(),
            e
        ))
    })?;

    debug!(path = %path.display(), bytes = content.len(), "wrote file");

    Ok(WrittenFile {
        path: path.to_path_buf(),
        bytes: content.len(),
    })
}

/// Copy `from` to `to` verbatim, creating parent directories as needed.
pub fn copy_file(from: &Path, to: &Path) -> Result<WrittenFile> {
    if !from.is_file() {
        return Err(Error::InputNotFound(from.to_path_buf()));
    }

    ensure_parent_dir(to)?;

    let bytes = fs::copy(from, to).map_err(|e| Error::io_at("copy", from, e))?;

    debug!(from = %from.display(), to = %to.display(), bytes, "copied file");

    Ok(WrittenFile {
        path: to.to_path_buf(),
        bytes: bytes as usize,
    })
}

/// Read a UTF-8 input file, reporting missing files as [`Error::InputNotFound`].
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::InputNotFound(path.to_path_buf())
        } else {
            Error::io_at("read", path, e)
        }
    })
}

/// Validates an output path to prevent directory traversal.
///
/// Joins `relative` onto `base_dir`, normalizes the result and checks that it
/// is still under `base_dir`.
pub fn validate_output_path(base_dir: &Path, relative: &str) -> Result<PathBuf> {
    if relative.contains('\0') {
        return Err(Error::InvalidOutputPath(
            "Filename contains null byte".to_string(),
        ));
    }

    let base_dir = base_dir.clean();
    let full_path = base_dir.join(Path::new(relative).clean()).clean();

    if !full_path.starts_with(&base_dir) {
        return Err(Error::InvalidOutputPath(format!(
            "Path '{}' escapes output directory '{}' (resolved to '{}')",
            relative,
            base_dir.display(),
            full_path.display()
        )));
    }

    Ok(full_path)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            Error::WriteFailure(format!(
                "Failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Best-effort cleanup; we are already returning an error.
fn cleanup_temp_file(temp_path: &Path) {
    if temp_path.exists() {
        if let Err(e) = fs::remove_file(temp_path) {
            tracing::warn!(
                "Failed to clean up temporary file '{}': {}",
                temp_path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_output_path_normal() {
        let base = Path::new("/tmp/output");
        let result = validate_output_path(base, "tinycolor.js");
        assert_eq!(result.unwrap(), Path::new("/tmp/output/tinycolor.js"));
    }

    #[test]
    fn test_validate_output_path_nested() {
        let base = Path::new("/tmp/output");
        let result = validate_output_path(base, "npm/dist/tinycolor-min.js");
        assert_eq!(
            result.unwrap(),
            Path::new("/tmp/output/npm/dist/tinycolor-min.js")
        );
    }

    #[test]
    fn test_validate_output_path_traversal() {
        let base = Path::new("/tmp/output");
        let result = validate_output_path(base, "../etc/passwd");
        assert!(matches!(result.unwrap_err(), Error::InvalidOutputPath(_)));

        let result = validate_output_path(base, "npm/../../../../etc/passwd");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_null_byte() {
        let base = Path::new("/tmp/output");
        assert!(validate_output_path(base, "file\0name.js").is_err());
    }

    #[test]
    fn test_validate_output_path_current_dir() {
        let base = Path::new("/tmp/output");
        let result = validate_output_path(base, "./npm/./cjs/test.js");
        assert_eq!(result.unwrap(), Path::new("/tmp/output/npm/cjs/test.js"));
    }

    #[test]
    fn test_temp_path_keeps_full_name() {
        assert_eq!(
            temp_path_for(Path::new("/a/dist/tinycolor-min.js")),
            Path::new("/a/dist/tinycolor-min.js.tmp")
        );
    }

    #[test]
    fn test_write_text_creates_parents_and_leaves_no_temp() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("npm/dist/tinycolor-min.js");

        let written = write_text(&target, "!function(){}();").unwrap();

        assert_eq!(written.bytes, 16);
        assert_eq!(fs::read_to_string(&target).unwrap(), "!function(){}();");
        assert!(!temp_path_for(&target).exists());
    }

    #[test]
    fn test_write_text_overwrites() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("tinycolor.js");
        write_text(&target, "old").unwrap();
        write_text(&target, "new").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_copy_file_verbatim() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("LICENSE");
        fs::write(&from, "MIT License\r\n\r\nCopyright").unwrap();

        let to = temp.path().join("npm/LICENSE");
        let written = copy_file(&from, &to).unwrap();

        assert_eq!(fs::read(&to).unwrap(), fs::read(&from).unwrap());
        assert_eq!(written.bytes, 26);
    }

    #[test]
    fn test_copy_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = copy_file(&temp.path().join("README.md"), &temp.path().join("npm/README.md"))
            .unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }

    #[test]
    fn test_read_text_missing() {
        let temp = TempDir::new().unwrap();
        let err = read_text(&temp.path().join("test.js")).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }

    #[test]
    fn test_read_text_invalid_utf8_keeps_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.js");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, Error::IoError { .. }), "got {err:?}");
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
