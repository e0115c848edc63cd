//! Error handling for the distkit CLI.
//!
//! `CliError` is the top-level type returned by commands. Domain errors
//! (`ConfigError`, `BuildError`) carry a hint telling the user what to change,
//! and library errors from `distkit-bundler` pass through untouched so their
//! diagnostic codes survive to the report.

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Build process errors
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Errors from the packaging library
    #[error(transparent)]
    Bundler(#[from] distkit_bundler::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file doesn't exist
    #[error("Config file not found: {}\n\nHint: Create distkit.config.json in the project root or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// Config sources could not be merged into a valid configuration
    #[error("Failed to load configuration: {0}\n\nHint: Check distkit.config.json syntax and field types; run 'distkit schema' for the expected shape")]
    Load(String),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Build process errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Entry module doesn't exist
    #[error("Entry point not found: {}\n\nHint: Check the 'entry' field in your config or the --entry argument", .0.display())]
    EntryNotFound(PathBuf),

    /// `distkit check` found error-level issues
    #[error("{errors} check(s) failed\n\nHint: Create the missing inputs listed above, then run 'distkit check' again")]
    CheckFailed {
        /// Number of error-level issues
        errors: usize,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
