#![cfg_attr(docsrs, feature(doc_cfg))]

//! # distkit-bundler
//!
//! Packages a JavaScript library into the distribution layout published to npm
//! and CDNs: a legacy UMD bundle (plus a minified copy), a CJS flavored module
//! and an ESM module, each with a small test harness stitched together from the
//! project's shared test file.
//!
//! Bundling is delegated to Rolldown, minification to the oxc minifier.
//!
//! ## Quick Start
//!
//! ### Run the whole pipeline
//!
//! ```no_run
//! use distkit_bundler::{PackageOptions, Packager};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = Packager::new(PackageOptions::new("./tinycolor"))
//!     .run()
//!     .await?;
//!
//! for file in &report.written {
//!     println!("{} ({} bytes)", file.path.display(), file.bytes);
//! }
//! # Ok(()) }
//! ```
//!
//! ### Generate a single format
//!
//! ```no_run
//! use distkit_bundler::{BundleInput, DistFormat, MinifyLevel, minify};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let umd = BundleInput::new("mod.js")
//!     .cwd("./tinycolor")
//!     .name("tinycolor")
//!     .generate(DistFormat::Umd)
//!     .await?;
//!
//! let minified = minify(&umd.code, DistFormat::Umd, MinifyLevel::Identifiers)?;
//! assert!(minified.len() <= umd.code.len());
//! # Ok(()) }
//! ```

pub mod builders;
pub mod diagnostics;
pub mod harness;
pub mod output;
pub mod pipeline;
pub mod preamble;

pub use builders::{BundleInput, DistFormat, GeneratedCode, MinifyLevel, minify};
pub use output::{DistLayout, WrittenFile};
pub use pipeline::{CheckIssue, IssueSeverity, PackageOptions, PackageReport, Packager};

// Logging utilities (optional, enabled with "logging" feature)
#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;

#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub use logging::{LogLevel, init_logging, init_logging_from_env};

/// Error types for distkit-bundler operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from Rolldown bundler.
    #[error("Rolldown bundler error: {}", format_bundler_error(.0))]
    Bundler(Vec<diagnostics::ExtractedDiagnostic>),

    /// Rolldown finished without emitting an entry chunk.
    #[error("No entry chunk generated for {format} output of '{entry}'")]
    MissingEntryChunk { entry: String, format: DistFormat },

    /// The generated code could not be parsed by the minifier.
    #[error("Minification failed: {0}")]
    Minify(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid output path (e.g., directory traversal attempt).
    #[error("Invalid output path: {0}")]
    InvalidOutputPath(String),

    /// File write operation failed.
    #[error("Write failure: {0}")]
    WriteFailure(String),

    /// An input file the pipeline reads does not exist.
    #[error("Input not found: {}", .0.display())]
    InputNotFound(std::path::PathBuf),

    /// I/O error with context message.
    #[error("{message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for distkit-bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a bundler error from a Rolldown error.
    ///
    /// Extracts structured diagnostics from Rolldown's error types.
    pub fn from_rolldown_batch(error: &dyn std::fmt::Debug) -> Self {
        Error::Bundler(diagnostics::extract_from_rolldown_error(error))
    }

    /// Wrap an I/O error with the path that produced it.
    pub(crate) fn io_at(action: &str, path: &std::path::Path, source: std::io::Error) -> Self {
        Error::IoError {
            message: format!("Failed to {} '{}': {}", action, path.display(), source),
            source,
        }
    }
}

/// Format bundler error diagnostics for display.
fn format_bundler_error(diagnostics: &[diagnostics::ExtractedDiagnostic]) -> String {
    if diagnostics.is_empty() {
        return "Unknown bundler error".to_string();
    }

    if diagnostics.len() == 1 {
        let diag = &diagnostics[0];
        format!("{}: {}", diag.kind, diag.message)
    } else {
        format!(
            "{} errors: {}",
            diagnostics.len(),
            diagnostics
                .iter()
                .map(|d| format!("{}: {}", d.kind, d.message))
                .collect::<Vec<_>>()
                .join("; ")
        )
    }
}

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::Bundler(_) => "BUNDLER_ERROR",
            Error::MissingEntryChunk { .. } => "MISSING_ENTRY_CHUNK",
            Error::Minify(_) => "MINIFY_ERROR",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::InvalidOutputPath(_) => "INVALID_OUTPUT_PATH",
            Error::WriteFailure(_) => "WRITE_FAILURE",
            Error::InputNotFound(_) => "INPUT_NOT_FOUND",
            Error::IoError { .. } => "IO_ERROR",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::InvalidConfig(msg) => Some(Box::new(format!(
                "Check distkit.config.json and the command-line flags.\nError: {}",
                msg
            ))),
            Error::InvalidOutputPath(path) => Some(Box::new(format!(
                "The output path '{}' is invalid. Ensure it's within the project directory and doesn't contain '..' components.",
                path
            ))),
            Error::WriteFailure(msg) => Some(Box::new(format!(
                "Failed to write file. Check disk space and permissions.\nError: {}",
                msg
            ))),
            Error::InputNotFound(path) => Some(Box::new(format!(
                "'{}' is read by the packaging pipeline. Run `distkit check` to list every missing input.",
                path.display()
            ))),
            Error::Minify(_) => Some(Box::new(
                "The bundler produced code the minifier could not parse. Try --minify none to inspect the raw bundle.",
            )),
            Error::Bundler(diagnostics) => {
                if diagnostics.len() == 1 {
                    diagnostics[0]
                        .help
                        .as_ref()
                        .map(|h| Box::new(h.clone()) as Box<dyn std::fmt::Display>)
                } else {
                    Some(Box::new(
                        "Multiple bundler errors occurred. See details below.".to_string(),
                    ))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn test_bundler_error_display_single() {
        let err = Error::Bundler(vec![diagnostics::ExtractedDiagnostic::other(
            "UnresolvedEntry",
            "Cannot resolve entry module mod.js",
        )]);
        let msg = err.to_string();
        assert!(msg.contains("UnresolvedEntry"));
        assert!(msg.contains("mod.js"));
    }

    #[test]
    fn test_bundler_error_display_empty() {
        let err = Error::Bundler(Vec::new());
        assert!(err.to_string().contains("Unknown bundler error"));
    }

    #[test]
    fn test_missing_entry_chunk_message() {
        let err = Error::MissingEntryChunk {
            entry: "mod.js".to_string(),
            format: DistFormat::Esm,
        };
        assert_eq!(
            err.to_string(),
            "No entry chunk generated for esm output of 'mod.js'"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = Error::InputNotFound("npm/cjs/test_template.js".into());
        assert_eq!(err.code().unwrap().to_string(), "INPUT_NOT_FOUND");
        assert!(err.help().unwrap().to_string().contains("distkit check"));

        let err = Error::Minify("unexpected token".to_string());
        assert_eq!(err.code().unwrap().to_string(), "MINIFY_ERROR");
    }
}
