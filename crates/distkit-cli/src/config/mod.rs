//! Configuration for distkit with multi-source loading.
//!
//! Priority: CLI > Environment (`DISTKIT_*`) > `distkit.config.json` > Defaults

mod defaults;
mod loading;
mod validation;

use distkit_bundler::PackageOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::MinifyMode;

pub use defaults::*;
pub use loading::{CONFIG_FILE_NAME, ConfigOverrides, ENV_PREFIX};
pub use validation::*;

/// distkit configuration - loaded from distkit.config.json, the environment
/// and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DistkitConfig {
    /// Entry module, relative to the project root
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Package name: the UMD global and the bundle file stem
    #[schemars(regex(pattern = r"^[a-zA-Z_$][a-zA-Z0-9_$]*$"))]
    #[serde(default = "default_name")]
    pub name: String,

    /// Publishing directory, relative to the project root
    #[serde(default = "default_npm_dir")]
    pub npm_dir: PathBuf,

    /// Shared test source the harnesses are cut from
    #[serde(default = "default_test_source")]
    pub test_source: PathBuf,

    /// Minification level for the CDN bundle
    #[serde(default)]
    pub minify: MinifyMode,

    /// Also write the unprefixed bundles at the project root
    #[serde(default = "default_legacy_copies")]
    pub legacy_copies: bool,

    /// Files copied verbatim into the publishing directory
    #[serde(default = "default_metadata")]
    pub metadata: Vec<String>,
}

impl Default for DistkitConfig {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            name: default_name(),
            npm_dir: default_npm_dir(),
            test_source: default_test_source(),
            minify: MinifyMode::default(),
            legacy_copies: default_legacy_copies(),
            metadata: default_metadata(),
        }
    }
}

impl DistkitConfig {
    /// JSON Schema for distkit.config.json.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(DistkitConfig)
    }

    /// Packaging options for a project rooted at `root`.
    pub fn to_package_options(&self, root: &Path) -> PackageOptions {
        PackageOptions::new(root)
            .entry(&self.entry)
            .name(&self.name)
            .npm_dir(&self.npm_dir)
            .test_source(&self.test_source)
            .minify(self.minify.into())
            .legacy_copies(self.legacy_copies)
            .metadata(self.metadata.iter().cloned())
    }
}
