//! Test harness assembly.
//!
//! The shared test file starts with environment setup that differs per module
//! system, followed by the tests proper. Each format ships a template with its
//! own setup and a content token; the tests proper are pasted over the token.

use tracing::warn;

/// Marks where the tests proper start in the shared test source.
pub const TEST_BEGINS_MARKER: &str = "// TEST_BEGINS_HERE";

/// Replaced in each template by the test excerpt.
pub const CONTENT_TOKEN: &str = "// CONTENT_GOES_HERE";

/// Slice `test_source` from the first `marker` up to, but excluding, its last
/// character.
///
/// Without the marker the excerpt starts at the beginning of the source.
///
/// ```
/// use distkit_bundler::harness::{extract_excerpt, TEST_BEGINS_MARKER};
///
/// let src = "import x from 'x';\n// TEST_BEGINS_HERE\ntest();\n";
/// assert_eq!(extract_excerpt(src, TEST_BEGINS_MARKER), "// TEST_BEGINS_HERE\ntest();");
/// ```
pub fn extract_excerpt<'a>(test_source: &'a str, marker: &str) -> &'a str {
    let end = test_source
        .char_indices()
        .next_back()
        .map_or(0, |(idx, _)| idx);

    match test_source.find(marker) {
        Some(start) if start < end => &test_source[start..end],
        Some(_) => "",
        None => {
            warn!(marker, "test source has no begin marker; using the whole file");
            &test_source[..end]
        }
    }
}

/// Replace the first `token` in `template` with `excerpt`.
///
/// The excerpt is inserted literally. A template without the token is
/// returned unchanged.
pub fn render_template(template: &str, token: &str, excerpt: &str) -> String {
    if !template.contains(token) {
        warn!(token, "template has no content token; left unchanged");
    }
    template.replacen(token, excerpt, 1)
}

/// Build a harness from a template and the shared test source using the
/// default marker and token.
pub fn assemble(template: &str, test_source: &str) -> String {
    render_template(
        template,
        CONTENT_TOKEN,
        extract_excerpt(test_source, TEST_BEGINS_MARKER),
    )
}
