use std::path::{Path, PathBuf};

use crate::Result;
use crate::builders::DistFormat;
use crate::builders::executor::execute_generate;

/// The library to bundle, independent of output format.
#[derive(Debug, Clone)]
pub struct BundleInput {
    /// Entry module, relative to `cwd` unless absolute.
    pub entry: String,

    /// Working directory used to resolve the entry and its imports.
    ///
    /// When unset, the process working directory is used.
    pub cwd: Option<PathBuf>,

    /// Global variable assigned by UMD output.
    pub name: Option<String>,
}

impl BundleInput {
    /// Create an input for the given entry module.
    pub fn new(entry: impl AsRef<Path>) -> Self {
        Self {
            entry: super::executor::normalize_entry_path(entry),
            cwd: None,
            name: None,
        }
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set the global name used by UMD output.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Bundle the entry and return the code of the entry chunk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bundler`](crate::Error::Bundler) when Rolldown fails,
    /// [`Error::InvalidConfig`](crate::Error::InvalidConfig) when UMD output is
    /// requested without a global name.
    pub async fn generate(&self, format: DistFormat) -> Result<GeneratedCode> {
        execute_generate(self, format).await
    }
}

/// Code of one generated entry chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    /// Format the code was generated in.
    pub format: DistFormat,

    /// File name Rolldown assigned to the chunk.
    pub filename: String,

    /// The generated source text.
    pub code: String,
}

impl GeneratedCode {
    /// Prepend a preamble to the generated code.
    pub fn with_preamble(&self, preamble: &str) -> String {
        let mut out = String::with_capacity(preamble.len() + self.code.len());
        out.push_str(preamble);
        out.push_str(&self.code);
        out
    }
}
