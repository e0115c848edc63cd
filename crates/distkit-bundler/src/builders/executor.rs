//! Rolldown invocation.
//!
//! Rolldown fixes the output format when the bundler is constructed, so every
//! format gets its own bundler built from the same [`BundleInput`].

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use rolldown::{BundlerBuilder, BundlerOptions, InputItem};
use rolldown_common::Output;
use tracing::debug;

use crate::builders::{BundleInput, DistFormat, GeneratedCode};
use crate::{Error, Result};

/// Normalize an entry path by cleaning redundant `.` / `..` segments.
pub(crate) fn normalize_entry_path(entry: impl AsRef<Path>) -> String {
    let cleaned: PathBuf = entry.as_ref().to_path_buf().clean();
    cleaned.to_string_lossy().into_owned()
}

pub(crate) async fn execute_generate(
    input: &BundleInput,
    format: DistFormat,
) -> Result<GeneratedCode> {
    let options = configure_rolldown_options(input, format)?;

    debug!(entry = %input.entry, %format, "generating bundle");

    let mut bundler = BundlerBuilder::default()
        .with_options(options)
        .build()
        .map_err(|e| Error::from_rolldown_batch(&e))?;

    let output = bundler
        .generate()
        .await
        .map_err(|e| Error::from_rolldown_batch(&e))?;

    for warning in &output.warnings {
        tracing::warn!("{:?}", warning);
    }

    output
        .assets
        .into_iter()
        .find_map(|item| match item {
            Output::Chunk(chunk) if chunk.is_entry => Some(GeneratedCode {
                format,
                filename: chunk.filename.to_string(),
                code: chunk.code.clone(),
            }),
            _ => None,
        })
        .ok_or_else(|| Error::MissingEntryChunk {
            entry: input.entry.clone(),
            format,
        })
}

/// Configure Rolldown options for one format.
fn configure_rolldown_options(input: &BundleInput, format: DistFormat) -> Result<BundlerOptions> {
    if format.needs_global_name() && input.name.is_none() {
        return Err(Error::InvalidConfig(format!(
            "{} output requires a global name",
            format
        )));
    }

    Ok(BundlerOptions {
        input: Some(vec![InputItem {
            name: None,
            import: input.entry.clone(),
        }]),
        cwd: input.cwd.clone(),
        format: Some(format.to_rolldown()),
        name: input.name.clone(),
        ..Default::default()
    })
}
