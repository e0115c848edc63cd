/// Parse and validate a package name used as a UMD global.
///
/// Must be a valid JavaScript identifier: a letter, underscore or dollar sign
/// followed by letters, digits, underscores or dollar signs.
///
/// Valid: tinycolor, _internal, $color, lib123
/// Invalid: 123abc, tiny-color, tiny.color, ""
pub fn parse_global(s: &str) -> Result<String, String> {
    let Some(first) = s.chars().next() else {
        return Err("Global name cannot be empty".to_string());
    };

    if !first.is_alphabetic() && first != '_' && first != '$' {
        return Err(format!(
            "Global name must start with a letter, underscore, or dollar sign: '{}'",
            s
        ));
    }

    if s.chars().any(|c| !c.is_alphanumeric() && c != '_' && c != '$') {
        return Err(format!(
            "Global name can only contain letters, numbers, underscores, or dollar signs: '{}'",
            s
        ));
    }

    Ok(s.to_string())
}
