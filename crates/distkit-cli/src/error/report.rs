//! Conversion of CLI errors into miette reports.

use crate::error::{BuildError, CliError};
use miette::Report;

/// Convert a `CliError` into a miette report.
///
/// Library errors keep their diagnostic code and help text.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Bundler(e) => Report::new(e),
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::CheckFailed { errors } => miette::miette!(
            code = "CHECK_FAILED",
            help = "Create the missing inputs listed above, then run 'distkit check' again",
            "{} check(s) failed",
            errors
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::path::PathBuf;

    #[test]
    fn test_bundler_error_keeps_code() {
        let report = cli_error_to_miette(CliError::Bundler(
            distkit_bundler::Error::InputNotFound(PathBuf::from("LICENSE")),
        ));
        assert_eq!(report.code().unwrap().to_string(), "INPUT_NOT_FOUND");
    }

    #[test]
    fn test_check_failed_report() {
        let report = cli_error_to_miette(BuildError::CheckFailed { errors: 2 }.into());
        assert_eq!(report.to_string(), "2 check(s) failed");
        assert_eq!(report.code().unwrap().to_string(), "CHECK_FAILED");
    }

    #[test]
    fn test_config_error_report() {
        let report =
            cli_error_to_miette(ConfigError::Load("invalid type: found string".into()).into());
        assert!(report.to_string().starts_with("Configuration error:"));
    }
}
