//! Status message functions for terminal output.
//!
//! Everything here writes to stderr; stdout is reserved for command output.

use owo_colors::{OwoColorize, Stream, Style};

/// Print a success message to stderr.
///
/// ```no_run
/// use wcb_cli::ui::success;
///
/// success("Config written to rollup.config.json");
/// ```
pub fn success(message: &str) {
    eprintln!(
        "{} {}",
        "✓".if_supports_color(Stream::Stderr, |s| s.style(Style::new().green().bold())),
        message
    );
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!(
        "{} {}",
        "ℹ".if_supports_color(Stream::Stderr, |s| s.style(Style::new().blue().bold())),
        message
    );
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stream::Stderr, |s| s.style(Style::new().yellow().bold())),
        message.if_supports_color(Stream::Stderr, |s| s.yellow())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        // These should not panic
        success("Success message");
        info("Info message");
        warning("Warning message");
    }
}
