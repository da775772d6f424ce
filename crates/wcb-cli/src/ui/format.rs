//! Formatting for config summaries.

use console::Term;
use owo_colors::{OwoColorize, Stream, Style};
use wcb_config::{BuildMode, PluginSpec, RollupConfig};

/// One-line description of a plugin descriptor.
///
/// # Examples
///
/// ```
/// use wcb_cli::ui::describe_plugin;
/// use wcb_config::PluginSpec;
///
/// assert_eq!(describe_plugin(&PluginSpec::Terser), "terser");
/// ```
pub fn describe_plugin(plugin: &PluginSpec) -> String {
    match plugin {
        PluginSpec::IndexHtml(_) => {
            "index-html (dynamicImport + webcomponents polyfills)".to_string()
        }
        PluginSpec::Resolve(opts) => {
            format!("node-resolve ({})", opts.extensions.join(", "))
        }
        PluginSpec::Babel(opts) => format!(
            "babel ({} plugins, {} browser targets)",
            opts.plugins.len(),
            opts.presets
                .iter()
                .map(|preset| match preset {
                    wcb_config::BabelPreset::Env(env) => env.targets.len(),
                })
                .sum::<usize>()
        ),
        PluginSpec::Terser => "terser".to_string(),
        PluginSpec::Workbox(opts) => format!("workbox (-> {})", opts.sw_dest.display()),
    }
}

/// Print a config summary to stderr.
pub fn print_config_summary(config: &RollupConfig, mode: BuildMode) {
    let width = (Term::stderr().size().1 as usize).min(80);
    let label = Style::new().bold();

    eprintln!(
        "\n{}",
        "Config Summary".if_supports_color(Stream::Stderr, |s| s.style(label.underline()))
    );
    eprintln!("{}", "─".repeat(width));

    let rows = [
        ("Input:", config.input.clone()),
        ("Mode:", mode.to_string()),
        ("Output:", config.output.dir.display().to_string()),
        (
            "Tree-shaking:",
            if config.treeshake { "on" } else { "off" }.to_string(),
        ),
    ];
    for (name, value) in rows {
        eprintln!(
            "  {} {}",
            name.if_supports_color(Stream::Stderr, |s| s.style(label)),
            value
        );
    }
    eprintln!("{}", "─".repeat(width));

    for plugin in &config.plugins {
        eprintln!(
            "  {} {}",
            "▸".if_supports_color(Stream::Stderr, |s| s.blue()),
            describe_plugin(plugin)
        );
    }

    let total = format!("{} plugins", config.plugins.len());
    eprintln!(
        "  {} {}",
        "Total:".if_supports_color(Stream::Stderr, |s| s.style(label)),
        total.if_supports_color(Stream::Stderr, |s| s.green())
    );
}
