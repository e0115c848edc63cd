use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::MinifyMode;
use crate::cli::validation::parse_global;

/// Available distkit subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the distribution layout
    ///
    /// Bundles the entry module as UMD and ESM, minifies the UMD bundle,
    /// assembles the CJS and ESM test harnesses and copies metadata files
    /// into the npm directory.
    Build(BuildArgs),

    /// Verify that every input a build reads is present
    ///
    /// Reports missing files as errors and templates or test sources
    /// without their markers as warnings. Nothing is written.
    Check(CheckArgs),

    /// Print the JSON schema of distkit.config.json
    Schema,
}

/// Arguments for the build command
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Project root
    ///
    /// Every other path is resolved against it. Defaults to the current
    /// directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Entry module, relative to the root
    #[arg(short, long, value_name = "FILE")]
    pub entry: Option<String>,

    /// Package name
    ///
    /// Used as the UMD global variable and as the bundle file stem
    /// (NAME.js, NAME-min.js). Must be a valid JavaScript identifier.
    #[arg(short, long, value_parser = parse_global)]
    pub name: Option<String>,

    /// Publishing directory, relative to the root
    #[arg(long, value_name = "DIR")]
    pub npm_dir: Option<PathBuf>,

    /// Shared test source the harnesses are cut from
    #[arg(long, value_name = "FILE")]
    pub test_source: Option<PathBuf>,

    /// Minification level for the CDN bundle
    ///
    /// - none: copy the bundle unchanged
    /// - whitespace: strip whitespace and comments
    /// - syntax: also compress syntax
    /// - identifiers: also mangle local names
    #[arg(short, long, value_enum)]
    pub minify: Option<MinifyMode>,

    /// Skip the unprefixed bundles at the project root
    ///
    /// By default NAME.js and dist/NAME-min.js are also written at the root
    /// for links that predate the npm directory.
    #[arg(long)]
    pub no_legacy: bool,

    /// Path to the config file
    ///
    /// Defaults to distkit.config.json in the project root, when present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Project root
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
