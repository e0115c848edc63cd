//! The packaging pipeline.
//!
//! A run is three generation steps followed by metadata copies, awaited one
//! after another. A failing step aborts the run; files written by earlier
//! steps are left in place.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::harness::{self, CONTENT_TOKEN, TEST_BEGINS_MARKER};
use crate::output::writer::{copy_file, read_text, write_text};
use crate::output::{DistLayout, WrittenFile};
use crate::preamble::{CDN_PREAMBLE, CJS_PREAMBLE, ESM_PREAMBLE};
use crate::{BundleInput, DistFormat, MinifyLevel, Result, minify};

/// Options for a packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOptions {
    /// Project root. Every other path is relative to it.
    pub root: PathBuf,

    /// Entry module.
    pub entry: String,

    /// Package name; also the UMD global and the bundle file stem.
    pub name: String,

    /// Publishing directory.
    pub npm_dir: PathBuf,

    /// Shared test source the harnesses are cut from.
    pub test_source: PathBuf,

    /// Minification applied to the CDN bundle.
    pub minify: MinifyLevel,

    /// Also write the unprefixed bundles at the project root.
    pub legacy_copies: bool,

    /// Files copied verbatim into the publishing directory.
    pub metadata: Vec<String>,
}

impl PackageOptions {
    /// Options with the default layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entry: "mod.js".to_string(),
            name: "tinycolor".to_string(),
            npm_dir: PathBuf::from("npm"),
            test_source: PathBuf::from("test.js"),
            minify: MinifyLevel::default(),
            legacy_copies: true,
            metadata: vec!["README.md".to_string(), "LICENSE".to_string()],
        }
    }

    pub fn entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = entry.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn npm_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.npm_dir = dir.into();
        self
    }

    pub fn test_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.test_source = path.into();
        self
    }

    pub fn minify(mut self, level: MinifyLevel) -> Self {
        self.minify = level;
        self
    }

    pub fn legacy_copies(mut self, enabled: bool) -> Self {
        self.legacy_copies = enabled;
        self
    }

    pub fn metadata<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata = files.into_iter().map(Into::into).collect();
        self
    }
}

/// Files written by a run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    pub written: Vec<WrittenFile>,
}

impl PackageReport {
    /// Sum of all written sizes.
    pub fn total_bytes(&self) -> usize {
        self.written.iter().map(|f| f.bytes).sum()
    }
}

/// How serious a [`CheckIssue`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// The run would fail.
    Error,
    /// The run would succeed but produce a suspicious harness.
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A problem found by [`Packager::check`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckIssue {
    pub severity: IssueSeverity,
    pub path: PathBuf,
    pub message: String,
}

impl CheckIssue {
    fn error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    fn warning(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Runs the packaging steps for one project.
#[derive(Debug, Clone)]
pub struct Packager {
    options: PackageOptions,
    layout: DistLayout,
}

impl Packager {
    pub fn new(options: PackageOptions) -> Self {
        let layout = DistLayout::new(&options.root, &options.name, &options.npm_dir);
        Self { options, layout }
    }

    pub fn options(&self) -> &PackageOptions {
        &self.options
    }

    pub fn layout(&self) -> &DistLayout {
        &self.layout
    }

    fn input(&self) -> BundleInput {
        BundleInput::new(&self.options.entry)
            .cwd(&self.options.root)
            .name(&self.options.name)
    }

    fn test_source_path(&self) -> PathBuf {
        self.options.root.join(&self.options.test_source)
    }

    /// Write the UMD bundle and its minified copy for CDN links.
    pub async fn write_cdn_umd(&self) -> Result<Vec<WrittenFile>> {
        info!("writing CDN UMD bundle");
        let umd = self.input().generate(DistFormat::Umd).await?;
        let minified = minify(&umd.code, DistFormat::Umd, self.options.minify)?;

        let mut written = vec![
            write_text(&self.layout.cdn_bundle(), &umd.with_preamble(CDN_PREAMBLE))?,
            write_text(
                &self.layout.cdn_minified(),
                &format!("{CDN_PREAMBLE}{minified}"),
            )?,
        ];

        if self.options.legacy_copies {
            written.push(write_text(&self.layout.legacy_bundle(), &umd.code)?);
            written.push(write_text(&self.layout.legacy_minified(), &minified)?);
        }

        Ok(written)
    }

    /// Write the CJS module and its test harness.
    ///
    /// The published CJS file is the UMD wrapper, which `require` understands.
    pub async fn write_npm_cjs(&self) -> Result<Vec<WrittenFile>> {
        info!("writing npm CJS module");
        let umd = self.input().generate(DistFormat::Umd).await?;
        self.write_module(DistFormat::Cjs, &umd.with_preamble(CJS_PREAMBLE))
    }

    /// Write the ESM module and its test harness.
    pub async fn write_npm_esm(&self) -> Result<Vec<WrittenFile>> {
        info!("writing npm ESM module");
        let esm = self.input().generate(DistFormat::Esm).await?;
        self.write_module(DistFormat::Esm, &esm.with_preamble(ESM_PREAMBLE))
    }

    fn write_module(&self, format: DistFormat, code: &str) -> Result<Vec<WrittenFile>> {
        let module = write_text(&self.layout.module_bundle(format), code)?;

        let template = read_text(&self.layout.test_template(format))?;
        let test_source = read_text(&self.test_source_path())?;
        let harness = write_text(
            &self.layout.test_harness(format),
            &harness::assemble(&template, &test_source),
        )?;

        Ok(vec![module, harness])
    }

    /// Copy the metadata files into the publishing directory.
    pub fn copy_metadata(&self) -> Result<Vec<WrittenFile>> {
        self.options
            .metadata
            .iter()
            .map(|file| {
                copy_file(
                    &self.layout.metadata_source(file),
                    &self.layout.metadata_target(file),
                )
            })
            .collect()
    }

    /// Run every step in order.
    pub async fn run(&self) -> Result<PackageReport> {
        let mut report = PackageReport::default();

        report.written.extend(self.write_cdn_umd().await?);
        report.written.extend(self.write_npm_cjs().await?);
        report.written.extend(self.write_npm_esm().await?);
        report.written.extend(self.copy_metadata()?);

        info!(
            files = report.written.len(),
            bytes = report.total_bytes(),
            "packaging complete"
        );
        Ok(report)
    }

    /// Inspect the inputs a run would read without writing anything.
    pub fn check(&self) -> Vec<CheckIssue> {
        let mut issues = Vec::new();

        let entry = self.options.root.join(&self.options.entry);
        if !entry.is_file() {
            issues.push(CheckIssue::error(&entry, "entry module not found"));
        }

        check_contains(
            &mut issues,
            &self.test_source_path(),
            TEST_BEGINS_MARKER,
            "test source",
        );

        for format in [DistFormat::Cjs, DistFormat::Esm] {
            check_contains(
                &mut issues,
                &self.layout.test_template(format),
                CONTENT_TOKEN,
                "test template",
            );
        }

        for file in &self.options.metadata {
            let source = self.layout.metadata_source(file);
            if !source.is_file() {
                issues.push(CheckIssue::error(&source, "metadata file not found"));
            }
        }

        debug!(issues = issues.len(), "check finished");
        issues
    }
}

fn check_contains(issues: &mut Vec<CheckIssue>, path: &Path, needle: &str, what: &str) {
    match read_text(path) {
        Ok(text) if !text.contains(needle) => issues.push(CheckIssue::warning(
            path,
            format!("{what} does not contain '{needle}'"),
        )),
        Ok(_) => {}
        Err(crate::Error::InputNotFound(_)) => {
            issues.push(CheckIssue::error(path, format!("{what} not found")))
        }
        Err(e) => issues.push(CheckIssue::error(
            path,
            format!("{what} could not be read: {e}"),
        )),
    }
}
