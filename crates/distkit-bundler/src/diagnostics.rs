//! Diagnostic extraction from Rolldown errors.
//!
//! Rolldown reports failures as batched diagnostics whose structure changes
//! between releases. We only depend on their `Debug` rendering and pull out the
//! pieces worth showing to a user: a kind, the file, a position and a hint.

use serde::{Deserialize, Serialize};

/// Extracted diagnostic information from Rolldown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDiagnostic {
    pub kind: DiagnosticKind,
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub help: Option<String>,
}

impl ExtractedDiagnostic {
    /// Build an error-level diagnostic that did not come from Rolldown.
    pub fn other(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Other(kind.into()),
            severity: DiagnosticSeverity::Error,
            message: message.into(),
            file: None,
            line: None,
            column: None,
            help: None,
        }
    }
}

/// Diagnostic kind (mirrors Rolldown's EventKind).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MissingExport,
    ParseError,
    UnresolvedEntry,
    UnresolvedImport,
    InvalidOption,
    Other(String),
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::MissingExport => write!(f, "MissingExport"),
            DiagnosticKind::ParseError => write!(f, "ParseError"),
            DiagnosticKind::UnresolvedEntry => write!(f, "UnresolvedEntry"),
            DiagnosticKind::UnresolvedImport => write!(f, "UnresolvedImport"),
            DiagnosticKind::InvalidOption => write!(f, "InvalidOption"),
            DiagnosticKind::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// Extract diagnostics from Rolldown error types.
pub fn extract_from_rolldown_error(error: &dyn std::fmt::Debug) -> Vec<ExtractedDiagnostic> {
    let error_str = format!("{error:?}");

    if error_str.contains("BatchedBuildDiagnostic") {
        return extract_multiple_from_string(&error_str);
    }

    vec![extract_single_from_string(&error_str)]
}

/// Extract multiple diagnostics from a batched error string.
fn extract_multiple_from_string(error_str: &str) -> Vec<ExtractedDiagnostic> {
    let parts: Vec<&str> = error_str
        .split("BatchedBuildDiagnostic")
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect();

    if parts.len() > 1 {
        parts
            .iter()
            .map(|part| extract_single_from_string(part))
            .collect()
    } else {
        vec![extract_single_from_string(error_str)]
    }
}

/// Extract a single diagnostic from a formatted error string.
fn extract_single_from_string(error_str: &str) -> ExtractedDiagnostic {
    let kind = classify(error_str);

    let severity = if error_str.contains("warning") || error_str.contains("Warning") {
        DiagnosticSeverity::Warning
    } else {
        DiagnosticSeverity::Error
    };

    let help = extract_help_text(error_str).or_else(|| default_help(&kind));

    ExtractedDiagnostic {
        file: extract_file_path(error_str),
        line: extract_line_number(error_str),
        column: None,
        kind,
        severity,
        message: error_str.trim().to_string(),
        help,
    }
}

fn classify(error_str: &str) -> DiagnosticKind {
    if error_str.contains("MissingExport") {
        DiagnosticKind::MissingExport
    } else if error_str.contains("UnresolvedEntry") {
        DiagnosticKind::UnresolvedEntry
    } else if error_str.contains("UnresolvedImport") || error_str.contains("Cannot resolve") {
        DiagnosticKind::UnresolvedImport
    } else if error_str.contains("Parse error")
        || error_str.contains("Syntax")
        || error_str.contains("Expected")
    {
        DiagnosticKind::ParseError
    } else if error_str.contains("InvalidOption") {
        DiagnosticKind::InvalidOption
    } else {
        DiagnosticKind::Other("BundlerError".to_string())
    }
}

fn default_help(kind: &DiagnosticKind) -> Option<String> {
    match kind {
        DiagnosticKind::UnresolvedEntry => {
            Some("Check the 'entry' setting; it is resolved relative to the project root.".into())
        }
        DiagnosticKind::UnresolvedImport => {
            Some("Imports are bundled from the project root; make sure the file exists.".into())
        }
        _ => None,
    }
}

/// Extract file path from error message.
fn extract_file_path(text: &str) -> Option<String> {
    for ext in &[".js", ".mjs", ".cjs", ".ts"] {
        if let Some(pos) = text.find(ext) {
            let before = &text[..pos + ext.len()];
            for indicator in &["in ", "at ", "file: ", "path: ", "\"", "'"] {
                if let Some(start) = before.rfind(indicator) {
                    let path_str = before[start + indicator.len()..].trim();
                    if !path_str.is_empty() {
                        return Some(path_str.to_string());
                    }
                }
            }
        }
    }
    None
}

/// Extract line number from patterns like "line 5" or "file.js:5:".
fn extract_line_number(text: &str) -> Option<u32> {
    if let Some(pos) = text.find("line ") {
        let num: String = text[pos + 5..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if let Ok(line) = num.parse() {
            return Some(line);
        }
    }

    for ext in &[".js:", ".mjs:", ".cjs:"] {
        if let Some(pos) = text.find(ext) {
            let num: String = text[pos + ext.len()..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            if let Ok(line) = num.parse() {
                return Some(line);
            }
        }
    }
    None
}

/// Extract help text from error message.
fn extract_help_text(text: &str) -> Option<String> {
    for indicator in &["help: ", "Help: ", "hint: ", "Hint: "] {
        if let Some(pos) = text.find(indicator) {
            let help_str = text[pos + indicator.len()..]
                .lines()
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
            if !help_str.is_empty() {
                return Some(help_str);
            }
        }
    }
    None
}
