//! distkit CLI - packages a JavaScript library for npm and CDNs.
//!
//! Parses arguments, initializes logging and colors, and dispatches to the
//! command implementations.

use clap::Parser;
use distkit_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Schema => commands::schema_execute(),
    };

    result.map_err(error::cli_error_to_miette)
}
