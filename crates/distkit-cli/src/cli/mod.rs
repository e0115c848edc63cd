//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `distkit build` - bundle, minify and write the distribution layout
//! - `distkit check` - verify the inputs a build reads
//! - `distkit schema` - print the JSON schema of `distkit.config.json`

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{BuildArgs, CheckArgs, Command};
pub use enums::*;
pub use validation::parse_global;

/// distkit - package a JavaScript library for npm and CDNs
#[derive(Parser, Debug)]
#[command(
    name = "distkit",
    version,
    about = "Package a JavaScript library for npm and CDNs",
    long_about = "distkit bundles a library entry module into a legacy UMD bundle (plus a\n\
                  minified copy), a CJS module and an ESM module, assembles a test harness\n\
                  for each module flavor and copies README and LICENSE into the npm package."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Logs every bundler invocation and every file written.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
