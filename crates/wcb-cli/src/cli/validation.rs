/// Parse and validate a source file extension.
///
/// Extensions must start with a dot, have at least one character after it,
/// and contain no path separators or whitespace.
///
/// # Examples
///
/// Valid: .js, .mjs, .d.ts
/// Invalid: js, ".", "./js", ".j s"
pub fn parse_extension(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Extension cannot be empty".to_string());
    }

    let Some(rest) = s.strip_prefix('.') else {
        return Err(format!("Extension must start with a dot: '{}'", s));
    };

    if rest.is_empty() {
        return Err("Extension needs at least one character after the dot".to_string());
    }

    if s.chars().any(|c| c == '/' || c == '\\' || c.is_whitespace()) {
        return Err(format!(
            "Extension cannot contain path separators or whitespace: '{}'",
            s
        ));
    }

    Ok(s.to_string())
}
