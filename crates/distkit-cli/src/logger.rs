//! Logging setup for the distkit CLI.
//!
//! # Verbosity
//!
//! 1. `--verbose`: debug for distkit crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`: custom filter
//! 4. Otherwise: info for distkit crates
//!
//! ```rust,no_run
//! use distkit_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Starting build");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::ui::should_use_color;

const VERBOSE_FILTER: &str = "distkit=debug,distkit_bundler=debug,distkit_cli=debug";
const QUIET_FILTER: &str = "distkit=error,distkit_bundler=error,distkit_cli=error";
const DEFAULT_FILTER: &str = "distkit=info,distkit_bundler=info,distkit_cli=info";

/// Build the filter for the given flags.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_color())
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}
