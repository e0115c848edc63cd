//! Check command implementation.
//!
//! Validates configuration and the inputs a build reads, without writing.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::config::ConfigOverrides;
use crate::error::{BuildError, Result};
use crate::ui;
use distkit_bundler::{CheckIssue, IssueSeverity, Packager};
use std::path::Path;

/// Execute the check command.
///
/// # Errors
///
/// Returns [`BuildError::CheckFailed`] when any error-level issue is found.
/// Warnings alone don't fail the check.
pub fn execute(args: CheckArgs) -> Result<()> {
    let root = utils::resolve_root(args.root.as_deref())?;

    ui::info("Checking configuration...");
    let config = utils::load_config(&root, &ConfigOverrides::default(), args.config.as_deref())?;
    ui::success("Configuration is valid");

    ui::info("Checking inputs...");
    let issues = Packager::new(config.to_package_options(&root)).check();
    report_issues(&issues, &root);

    let errors = count_errors(&issues);
    if errors > 0 {
        return Err(BuildError::CheckFailed { errors }.into());
    }

    ui::success("All checks passed!");
    Ok(())
}

fn count_errors(issues: &[CheckIssue]) -> usize {
    issues
        .iter()
        .filter(|issue| issue.severity == IssueSeverity::Error)
        .count()
}

fn report_issues(issues: &[CheckIssue], root: &Path) {
    for issue in issues {
        let shown = issue.path.strip_prefix(root).unwrap_or(&issue.path);
        let line = format!("{}: {}", shown.display(), issue.message);
        match issue.severity {
            IssueSeverity::Error => ui::error(&line),
            IssueSeverity::Warning => ui::warning(&line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn args(root: &Path) -> CheckArgs {
        CheckArgs {
            root: Some(root.to_path_buf()),
            config: None,
        }
    }

    #[test]
    fn test_count_errors_ignores_warnings() {
        let issues = vec![
            CheckIssue {
                severity: IssueSeverity::Warning,
                path: "test.js".into(),
                message: "no marker".into(),
            },
            CheckIssue {
                severity: IssueSeverity::Error,
                path: "LICENSE".into(),
                message: "missing".into(),
            },
        ];
        assert_eq!(count_errors(&issues), 1);
    }

    #[test]
    #[serial]
    fn test_check_empty_project_fails() {
        let temp = TempDir::new().unwrap();
        let err = execute(args(temp.path())).unwrap_err();
        assert!(matches!(
            err,
            CliError::Build(BuildError::CheckFailed { errors: 6 })
        ));
    }

    #[test]
    #[serial]
    fn test_check_warnings_only_passes() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        for (path, content) in [
            ("mod.js", "export default 1;\n"),
            ("test.js", "test();\n"),
            ("README.md", ""),
            ("LICENSE", ""),
            ("npm/cjs/test_template.js", "// CONTENT_GOES_HERE\n"),
            ("npm/esm/test_template.js", "// CONTENT_GOES_HERE\n"),
        ] {
            let full = root.join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, content).unwrap();
        }

        assert!(execute(args(root)).is_ok());
    }
}
