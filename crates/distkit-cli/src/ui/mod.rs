//! Terminal output: status messages and the build summary.
//!
//! Everything goes to stderr so stdout stays clean for `distkit schema`.

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, format_size, print_build_summary};
pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled on stderr.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them even when stderr is
/// not a terminal. Shared by status messages and the log formatter.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether messages are colored. `no_color` comes from `--no-color`.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    COLORS.store(enabled, Ordering::Relaxed);
    console::set_colors_enabled_stderr(enabled);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
