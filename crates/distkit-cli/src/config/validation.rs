use std::path::{Component, Path};

use distkit_bundler::output::writer::validate_output_path;

use crate::cli::parse_global;
use crate::config::DistkitConfig;
use crate::error::{ConfigError, Result};

/// Validate that the package name can be used as a UMD global.
pub fn validate_global_name(name: &str) -> Result<()> {
    parse_global(name).map(|_| ()).map_err(|hint| {
        ConfigError::InvalidValue {
            field: "name".to_string(),
            value: name.to_string(),
            hint,
        }
        .into()
    })
}

// Any absolute base works; only escaping it matters.
const ANCHOR: &str = "/project";

fn validate_relative(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ConfigError::MissingField {
            field: field.to_string(),
            hint: format!("'{}' cannot be empty", field),
        }
        .into());
    }

    if Path::new(value).is_absolute() || validate_output_path(Path::new(ANCHOR), value).is_err() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            hint: "Paths must be relative and stay inside the project root".to_string(),
        }
        .into());
    }

    Ok(())
}

impl DistkitConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        validate_global_name(&self.name)?;
        validate_relative("entry", &self.entry)?;
        validate_relative("npmDir", &self.npm_dir.to_string_lossy())?;
        validate_relative("testSource", &self.test_source.to_string_lossy())?;

        if self.npm_dir.components().all(|c| c == Component::CurDir) {
            return Err(ConfigError::InvalidValue {
                field: "npmDir".to_string(),
                value: ".".to_string(),
                hint: "The npm directory must differ from the project root".to_string(),
            }
            .into());
        }

        for file in &self.metadata {
            validate_relative("metadata", file)?;
        }

        Ok(())
    }
}
