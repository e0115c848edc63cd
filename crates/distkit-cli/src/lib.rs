//! distkit CLI - packages a JavaScript library into its npm and CDN layout.
//!
//! The heavy lifting lives in `distkit-bundler`; this crate adds argument
//! parsing, `distkit.config.json` loading, terminal output and error reporting.
//!
//! # Architecture
//!
//! - [`cli`] - clap definitions
//! - [`config`] - layered configuration (defaults, file, environment, flags)
//! - [`commands`] - `build`, `check` and `schema`
//! - [`error`] - error types with actionable hints
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages and the build summary
//!
//! # Example
//!
//! ```rust,no_run
//! use distkit_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{BuildError, CliError, ConfigError, Result};
