//! Status messages printed to stderr.

use owo_colors::OwoColorize;

use super::colors_enabled;

/// Print a success message.
///
/// ```no_run
/// use distkit_cli::ui::success;
///
/// success("Packaged 10 files");
/// ```
pub fn success(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {}", message);
    }
}

/// Print an info message.
pub fn info(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {}", message);
    }
}

/// Print a warning message.
pub fn warning(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {}", message);
    }
}

/// Print an error message.
pub fn error(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    } else {
        eprintln!("✗ {}", message);
    }
}
