//! Minification of generated bundles.
//!
//! Provides granular control over JavaScript minification using a string-based API
//! for configuration file compatibility.

use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::builders::DistFormat;
use crate::{Error, Result};

/// Validated minification level.
///
/// Controls how aggressively JavaScript code is minified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinifyLevel {
    /// No minification - output readable code.
    None,
    /// Remove whitespace and comments only.
    Whitespace,
    /// Syntax-level optimizations (identifiers preserved).
    Syntax,
    /// Full minification including identifier mangling.
    #[default]
    Identifiers,
}

impl MinifyLevel {
    /// Parse a minification level from a string.
    ///
    /// # Supported Values
    ///
    /// - `"none"` - No minification
    /// - `"whitespace"` - Remove whitespace only
    /// - `"syntax"` - Syntax-level minification
    /// - `"identifiers"` - Full minification with identifier mangling
    ///
    /// Values are case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use distkit_bundler::MinifyLevel;
    ///
    /// assert_eq!(MinifyLevel::parse("none").unwrap(), MinifyLevel::None);
    /// assert_eq!(MinifyLevel::parse("IDENTIFIERS").unwrap(), MinifyLevel::Identifiers);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error for unrecognized values.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" | "false" => Ok(Self::None),
            "whitespace" => Ok(Self::Whitespace),
            "syntax" => Ok(Self::Syntax),
            "identifiers" | "true" => Ok(Self::Identifiers),
            _ => Err(Error::InvalidConfig(format!(
                "Invalid minify level: '{}'. Expected: none, whitespace, syntax, identifiers",
                s
            ))),
        }
    }

    /// Returns true if any minification is enabled.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }

    fn to_oxc_options(self) -> MinifierOptions {
        MinifierOptions {
            mangle: matches!(self, Self::Identifiers).then(MangleOptions::default),
            compress: matches!(self, Self::Syntax | Self::Identifiers)
                .then(CompressOptions::default),
        }
    }
}

impl std::fmt::Display for MinifyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Whitespace => write!(f, "whitespace"),
            Self::Syntax => write!(f, "syntax"),
            Self::Identifiers => write!(f, "identifiers"),
        }
    }
}

impl std::str::FromStr for MinifyLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Minify generated code.
///
/// UMD and CJS output is parsed as a script, ESM output as a module.
/// `MinifyLevel::None` returns the input unchanged.
///
/// # Errors
///
/// Returns [`Error::Minify`] when the code does not parse.
pub fn minify(code: &str, format: DistFormat, level: MinifyLevel) -> Result<String> {
    if !level.is_enabled() {
        return Ok(code.to_string());
    }

    let allocator = Allocator::default();
    let source_type = SourceType::default().with_module(format == DistFormat::Esm);

    let parsed = Parser::new(&allocator, code, source_type).parse();
    if parsed.panicked || !parsed.errors.is_empty() {
        let messages = parsed
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(Error::Minify(messages));
    }

    let mut program = parsed.program;
    let ret = Minifier::new(level.to_oxc_options()).minify(&allocator, &mut program);

    let printed = Codegen::new()
        .with_options(CodegenOptions::minify())
        .with_scoping(ret.scoping)
        .build(&program);

    Ok(printed.code)
}
