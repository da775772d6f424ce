//! `wcb check`: load options and report what a build would run.

use std::path::Path;

use wcb_config::options::is_html_entry;
use wcb_config::{PluginSpec, RollupConfig};

use crate::cli::CheckArgs;
use crate::commands::{load_config, project_root};
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and merge options (file, environment, flags)
/// 2. Build the configuration, which queries browsers and workbox settings
/// 3. Report the plugin list and warnings about the entry point
///
/// # Errors
///
/// Returns option loading and toolchain failures.
pub fn execute(args: CheckArgs, cwd: Option<&Path>) -> Result<()> {
    let root = project_root(cwd)?;
    ui::info("Checking configuration...");

    let loaded = load_config(&root, &args.options)?;
    ui::print_config_summary(&loaded.config, loaded.mode);

    for warning in collect_warnings(&root, &loaded.config) {
        ui::warning(&warning);
    }

    ui::success("Configuration is valid!");
    Ok(())
}

/// Non-fatal issues worth pointing out before a build.
pub fn collect_warnings(root: &Path, config: &RollupConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if !root.join(&config.input).exists() {
        warnings.push(format!("Entry point not found: {}", config.input));
    }

    let html_input = is_html_entry(&config.input);
    let html_plugin = config
        .plugins
        .iter()
        .any(|p| matches!(p, PluginSpec::IndexHtml(_)));
    if html_input && !html_plugin {
        warnings.push(
            "HTML input without the index-html plugin; the bundler will parse it as JavaScript"
                .to_string(),
        );
    }
    if !html_input && html_plugin {
        warnings.push("index-html plugin enabled for a non-HTML input".to_string());
    }

    warnings
}
