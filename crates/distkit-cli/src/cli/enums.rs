use clap::ValueEnum;
use distkit_bundler::MinifyLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minification level for the CDN bundle
#[derive(
    Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MinifyMode {
    /// Write the bundle unchanged
    #[value(name = "none")]
    None,

    /// Strip whitespace and comments
    #[value(name = "whitespace")]
    Whitespace,

    /// Compress syntax, keep names
    #[value(name = "syntax")]
    Syntax,

    /// Compress syntax and mangle local names
    #[default]
    #[value(name = "identifiers")]
    Identifiers,
}

impl From<MinifyMode> for MinifyLevel {
    fn from(mode: MinifyMode) -> Self {
        match mode {
            MinifyMode::None => MinifyLevel::None,
            MinifyMode::Whitespace => MinifyLevel::Whitespace,
            MinifyMode::Syntax => MinifyLevel::Syntax,
            MinifyMode::Identifiers => MinifyLevel::Identifiers,
        }
    }
}
