//! Build command implementation.
//!
//! Runs the packaging pipeline from `distkit-bundler` and prints a summary of
//! the files written.

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::ui;
use distkit_bundler::Packager;
use std::path::Path;
use std::time::Instant;

/// Execute the build command.
///
/// # Build Process
///
/// 1. Resolve the project root
/// 2. Load and validate configuration (CLI > Env > File > Defaults)
/// 3. Validate the entry module
/// 4. Run the pipeline: CDN UMD, npm CJS, npm ESM, metadata copies
/// 5. Display the build summary
///
/// A failing step aborts the build; files written before it stay on disk.
pub async fn execute(args: BuildArgs) -> Result<()> {
    let start_time = Instant::now();

    let root = utils::resolve_root(args.root.as_deref())?;

    ui::info("Loading configuration...");
    let config = utils::load_config(
        &root,
        &ConfigOverrides::from(&args),
        args.config.as_deref(),
    )?;

    utils::validate_entry(&utils::resolve_path(Path::new(&config.entry), &root))?;

    ui::info(&format!(
        "Packaging {} from {} (minify: {})",
        config.name,
        config.entry,
        distkit_bundler::MinifyLevel::from(config.minify)
    ));

    let packager = Packager::new(config.to_package_options(&root));
    let report = packager.run().await?;

    let duration = start_time.elapsed();
    ui::print_build_summary(&report, &root, duration);
    ui::success(&format!(
        "Packaged {} files in {}",
        report.written.len(),
        ui::format_duration(duration)
    ));

    Ok(())
}
