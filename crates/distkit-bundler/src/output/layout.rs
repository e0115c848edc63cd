//! The distribution layout.
//!
//! Every path a packaging run reads or writes is derived from three values:
//! the project root, the package name and the publishing directory. Links to
//! these paths are published, so the shape must not drift.

use std::path::{Path, PathBuf};

use crate::DistFormat;

/// Name of the per-format test template.
pub const TEST_TEMPLATE_FILE: &str = "test_template.js";

/// Name of the per-format assembled test harness.
pub const TEST_HARNESS_FILE: &str = "test.js";

/// Destination and input paths for one packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistLayout {
    root: PathBuf,
    name: String,
    npm_dir: PathBuf,
}

impl DistLayout {
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>, npm_dir: impl AsRef<Path>) -> Self {
        let root = root.into();
        let npm_dir = root.join(npm_dir.as_ref());
        Self {
            root,
            name: name.into(),
            npm_dir,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The publishing directory (`R/P`).
    pub fn npm_dir(&self) -> &Path {
        &self.npm_dir
    }

    fn bundle_file(&self) -> String {
        format!("{}.js", self.name)
    }

    fn minified_file(&self) -> String {
        format!("{}-min.js", self.name)
    }

    /// `R/P/N.js`
    pub fn cdn_bundle(&self) -> PathBuf {
        self.npm_dir.join(self.bundle_file())
    }

    /// `R/P/dist/N-min.js`
    pub fn cdn_minified(&self) -> PathBuf {
        self.npm_dir.join("dist").join(self.minified_file())
    }

    /// `R/N.js`
    pub fn legacy_bundle(&self) -> PathBuf {
        self.root.join(self.bundle_file())
    }

    /// `R/dist/N-min.js`
    pub fn legacy_minified(&self) -> PathBuf {
        self.root.join("dist").join(self.minified_file())
    }

    /// Directory holding one module flavor (`R/P/cjs` or `R/P/esm`).
    ///
    /// UMD output lives directly in the publishing directory.
    pub fn format_dir(&self, format: DistFormat) -> PathBuf {
        match format {
            DistFormat::Umd => self.npm_dir.clone(),
            DistFormat::Cjs => self.npm_dir.join("cjs"),
            DistFormat::Esm => self.npm_dir.join("esm"),
        }
    }

    /// `R/P/{cjs,esm}/N.js`
    pub fn module_bundle(&self, format: DistFormat) -> PathBuf {
        self.format_dir(format).join(self.bundle_file())
    }

    /// `R/P/{cjs,esm}/test_template.js`
    pub fn test_template(&self, format: DistFormat) -> PathBuf {
        self.format_dir(format).join(TEST_TEMPLATE_FILE)
    }

    /// `R/P/{cjs,esm}/test.js`
    pub fn test_harness(&self, format: DistFormat) -> PathBuf {
        self.format_dir(format).join(TEST_HARNESS_FILE)
    }

    /// Source of a metadata file, relative to the root.
    pub fn metadata_source(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Destination of a metadata file inside the publishing directory.
    pub fn metadata_target(&self, file: &str) -> PathBuf {
        self.npm_dir.join(file)
    }
}
