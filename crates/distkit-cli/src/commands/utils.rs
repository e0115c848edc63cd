//! Shared utilities for command implementations.

use crate::config::{ConfigOverrides, DistkitConfig};
use crate::error::{BuildError, CliError, Result};
use std::path::{Path, PathBuf};

/// Resolve a path relative to a working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Resolve the project root from `--root`, defaulting to the current directory.
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let cwd = get_cwd()?;
    let root = root.map_or_else(|| cwd.clone(), |r| resolve_path(r, &cwd));

    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }

    Ok(root)
}

/// Validate that an entry module exists and is a file.
pub fn validate_entry(entry: &Path) -> Result<()> {
    if !entry.exists() {
        return Err(BuildError::EntryNotFound(entry.to_path_buf()).into());
    }

    if !entry.is_file() {
        return Err(CliError::InvalidArgument(format!(
            "Entry point is not a file: {}",
            entry.display()
        )));
    }

    Ok(())
}

/// Load and validate the configuration for `root`.
pub fn load_config(
    root: &Path,
    overrides: &ConfigOverrides,
    config_path: Option<&Path>,
) -> Result<DistkitConfig> {
    let config = DistkitConfig::load(root, overrides, config_path)?;
    config.validate()?;
    Ok(config)
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}
