//! Terminal output helpers.
//!
//! ```no_run
//! use wcb_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Configuration is valid");
//! ```

mod format;
mod messages;

pub use format::{describe_plugin, print_config_summary};
pub use messages::{info, success, warning};

/// Apply the color choice to everything printed through owo-colors.
///
/// `--no-color` always wins; otherwise `NO_COLOR`, `FORCE_COLOR` and
/// terminal detection decide.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && crate::logger::should_use_colors();
    owo_colors::set_override(enabled);
}
