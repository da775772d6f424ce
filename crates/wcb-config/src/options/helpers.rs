use std::path::PathBuf;

pub(crate) const HTML_SUFFIX: &str = ".html";

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

/// Whether `input` names an HTML entry point.
pub fn is_html_entry(input: &str) -> bool {
    input.ends_with(HTML_SUFFIX)
}
