//! Schema command implementation.

use crate::config::DistkitConfig;
use crate::error::Result;

/// Print the JSON schema of distkit.config.json to stdout.
pub fn execute() -> Result<()> {
    let schema = serde_json::to_string_pretty(&DistkitConfig::json_schema())?;
    println!("{schema}");
    Ok(())
}
