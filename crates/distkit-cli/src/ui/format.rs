//! Formatting utilities for sizes, durations, and build summaries.

use console::Term;
use distkit_bundler::PackageReport;
use owo_colors::OwoColorize;
use std::path::Path;
use std::time::Duration;

use super::colors_enabled;

/// Format file size in human-readable format.
///
/// ```
/// use distkit_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use distkit_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Rows of the build summary: path relative to `root`, and size.
pub(crate) fn summary_rows(report: &PackageReport, root: &Path) -> Vec<(String, u64)> {
    report
        .written
        .iter()
        .map(|file| {
            let shown = file.path.strip_prefix(root).unwrap_or(&file.path);
            (shown.display().to_string(), file.bytes as u64)
        })
        .collect()
}

/// Print the files written by a run, with sizes and a total, to stderr.
pub fn print_build_summary(report: &PackageReport, root: &Path, duration: Duration) {
    let width = (Term::stderr().size().1 as usize).min(80);
    let rule = "─".repeat(width);
    let rows = summary_rows(report, root);
    let name_width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let total = format_size(report.total_bytes() as u64);
    let elapsed = format_duration(duration);

    if colors_enabled() {
        eprintln!("\n{}", "Build Summary".bold().underline());
    } else {
        eprintln!("\nBuild Summary");
    }
    eprintln!("{}", rule);

    for (name, size) in &rows {
        let padded = format!("{:<name_width$}", name);
        if colors_enabled() {
            eprintln!(
                "  {} {} {}",
                "▸".blue(),
                padded.bright_white().bold(),
                format_size(*size).dimmed()
            );
        } else {
            eprintln!("  ▸ {} {}", padded, format_size(*size));
        }
    }

    eprintln!("{}", rule);
    if colors_enabled() {
        eprintln!(
            "  {} {} in {}",
            "Total:".bold(),
            total.green(),
            elapsed.green()
        );
    } else {
        eprintln!("  Total: {} in {}", total, elapsed);
    }
}
