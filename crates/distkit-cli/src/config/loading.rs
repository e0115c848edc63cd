use crate::cli::{BuildArgs, MinifyMode};
use crate::config::DistkitConfig;
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "distkit.config.json";

/// Prefix of environment overrides (`DISTKIT_NAME`, `DISTKIT_NPM_DIR`, ...).
pub const ENV_PREFIX: &str = "DISTKIT_";

const ENV_KEYS: &[&str] = &[
    "entry",
    "name",
    "npm_dir",
    "test_source",
    "minify",
    "legacy_copies",
];

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npm_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_source: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minify: Option<MinifyMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_copies: Option<bool>,
}

impl From<&BuildArgs> for ConfigOverrides {
    fn from(args: &BuildArgs) -> Self {
        Self {
            entry: args.entry.clone(),
            name: args.name.clone(),
            npm_dir: args.npm_dir.clone(),
            test_source: args.test_source.clone(),
            minify: args.minify,
            legacy_copies: args.no_legacy.then_some(false),
        }
    }
}

impl DistkitConfig {
    /// Load configuration for the project at `root`.
    ///
    /// `config_path` must exist when given; otherwise `root/distkit.config.json`
    /// is used if present.
    pub fn load(
        root: &Path,
        overrides: &ConfigOverrides,
        config_path: Option<&Path>,
    ) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = Self::locate_file(root, config_path)? {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Json::file(path));
        }

        let env = Env::prefixed(ENV_PREFIX)
            .only(ENV_KEYS)
            .map(|key| env_key_to_camel(key.as_str()).into())
            .lowercase(false);

        figment = figment
            .merge(env)
            .merge(Serialized::defaults(overrides));

        figment
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()).into())
    }

    fn locate_file(root: &Path, config_path: Option<&Path>) -> Result<Option<PathBuf>> {
        match config_path {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    root.join(path)
                };
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path).into());
                }
                Ok(Some(path))
            }
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                Ok(default_path.is_file().then_some(default_path))
            }
        }
    }
}

/// `NPM_DIR` -> `npmDir`
pub(crate) fn env_key_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}
