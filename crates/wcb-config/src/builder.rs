//! Assembles the bundler configuration from build options.

use tracing::{debug, info};

use crate::error::Result;
use crate::mode::BuildMode;
use crate::options::{BuildOptions, ResolvedOptions};
use crate::plugins::{BabelOptions, PluginSpec, ResolveOptions};
use crate::rollup::{OutputOptions, RollupConfig};
use crate::toolchain::Toolchain;

/// Build the bundler configuration for `options`.
///
/// Plugins are appended in a fixed order and left out entirely when
/// disabled:
///
/// 1. `index-html` when `plugins.index_html` is on
/// 2. `node-resolve`, always
/// 3. `babel` when `plugins.babel` is on
/// 4. `terser` in production
/// 5. `workbox` in production when `plugins.workbox` is on
///
/// Toolchain lookups happen only for plugins that end up in the list. Their
/// errors are returned as-is.
///
/// # Example
///
/// ```
/// use wcb_config::{create_config, BuildMode, BuildOptions, StaticToolchain};
///
/// let config = create_config(
///     BuildOptions::new("index.html"),
///     BuildMode::Watch,
///     &StaticToolchain::default(),
/// )
/// .unwrap();
///
/// assert_eq!(config.plugin_names(), vec!["index-html", "node-resolve", "babel"]);
/// assert!(!config.treeshake);
/// ```
pub fn create_config<T>(options: BuildOptions, mode: BuildMode, toolchain: &T) -> Result<RollupConfig>
where
    T: Toolchain + ?Sized,
{
    let resolved = options.resolve(|| toolchain.default_extensions());
    let production = mode.is_production();
    info!(input = %resolved.input, %mode, "creating bundler config");

    let plugins = build_plugins(&resolved, production, toolchain)?;

    Ok(RollupConfig {
        input: resolved.input,
        treeshake: production,
        output: OutputOptions::esm(resolved.output_dir),
        plugins,
    })
}

fn build_plugins<T>(
    resolved: &ResolvedOptions,
    production: bool,
    toolchain: &T,
) -> Result<Vec<PluginSpec>>
where
    T: Toolchain + ?Sized,
{
    let flags = resolved.plugins;
    let mut plugins = Vec::with_capacity(5);

    if flags.index_html {
        plugins.push(PluginSpec::IndexHtml(
            resolved.index_html_plugin.clone().with_required_polyfills(),
        ));
    } else {
        debug!("index-html disabled");
    }

    plugins.push(PluginSpec::Resolve(ResolveOptions {
        extensions: resolved.extensions.clone(),
    }));

    if flags.babel {
        plugins.push(PluginSpec::Babel(BabelOptions::new(
            resolved.extensions.clone(),
            production,
            toolchain.supported_browsers()?,
            toolchain.css_minifier(),
        )));
    } else {
        debug!("babel disabled");
    }

    if production {
        plugins.push(PluginSpec::Terser);

        if flags.workbox {
            plugins.push(PluginSpec::Workbox(
                toolchain.workbox_config(&resolved.output_dir)?,
            ));
        } else {
            debug!("workbox disabled");
        }
    } else {
        debug!("watch mode: skipping terser and workbox");
    }

    Ok(plugins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::plugins::WorkboxConfig;
    use crate::toolchain::StaticToolchain;
    use std::cell::Cell;
    use std::path::Path;

    /// Counts lookups and fails workbox on demand
    #[derive(Default)]
    struct CountingToolchain {
        browser_calls: Cell<usize>,
        workbox_calls: Cell<usize>,
        fail_workbox: bool,
    }

    impl Toolchain for CountingToolchain {
        fn supported_browsers(&self) -> Result<Vec<String>> {
            self.browser_calls.set(self.browser_calls.get() + 1);
            Ok(vec!["defaults".to_string()])
        }

        fn workbox_config(&self, output_dir: &Path) -> Result<WorkboxConfig> {
            self.workbox_calls.set(self.workbox_calls.get() + 1);
            if self.fail_workbox {
                return Err(ConfigError::NotFound);
            }
            Ok(WorkboxConfig::for_output_dir(Path::new("/"), output_dir))
        }
    }

    #[test]
    fn production_plugin_order() {
        let config = create_config(
            BuildOptions::new("index.html"),
            BuildMode::Production,
            &StaticToolchain::default(),
        )
        .unwrap();

        assert_eq!(
            config.plugin_names(),
            vec!["index-html", "node-resolve", "babel", "terser", "workbox"]
        );
        assert!(config.treeshake);
    }

    #[test]
    fn disabled_plugins_skip_toolchain_lookups() {
        let toolchain = CountingToolchain::default();
        let options = BuildOptions::new("main.js").with_plugins(crate::PluginOverrides {
            babel: Some(false),
            workbox: Some(false),
            ..Default::default()
        });

        let config = create_config(options, BuildMode::Production, &toolchain).unwrap();
        assert_eq!(config.plugin_names(), vec!["node-resolve", "terser"]);
        assert_eq!(toolchain.browser_calls.get(), 0);
        assert_eq!(toolchain.workbox_calls.get(), 0);
    }

    #[test]
    fn watch_mode_never_asks_for_workbox() {
        let toolchain = CountingToolchain {
            fail_workbox: true,
            ..Default::default()
        };
        let config = create_config(BuildOptions::new("main.js"), BuildMode::Watch, &toolchain)
            .unwrap();
        assert_eq!(config.plugin_names(), vec!["node-resolve", "babel"]);
        assert_eq!(toolchain.workbox_calls.get(), 0);
    }

    #[test]
    fn toolchain_errors_propagate() {
        let toolchain = CountingToolchain {
            fail_workbox: true,
            ..Default::default()
        };
        let result = create_config(BuildOptions::new("main.js"), BuildMode::Production, &toolchain);
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn works_through_trait_object() {
        let toolchain: Box<dyn Toolchain> = Box::new(StaticToolchain::default());
        let config =
            create_config(BuildOptions::new("main.js"), BuildMode::Watch, toolchain.as_ref())
                .unwrap();
        assert_eq!(config.input, "main.js");
    }
}
