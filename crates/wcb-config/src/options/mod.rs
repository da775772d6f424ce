//! Caller-facing build options and their merge with defaults.

mod helpers;
mod html;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub use html::{IndexHtmlOptions, Polyfills};

pub use helpers::is_html_entry;

use crate::error::{ConfigError, Result};
use helpers::default_output_dir;

/// Options supplied by the caller
///
/// Everything except `input` is optional. Unset fields are filled from
/// defaults by [`BuildOptions::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Entry module or HTML file the bundler starts from
    pub input: String,

    /// Output directory (default: `dist`)
    #[serde(default, alias = "outputDir", skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Source file extensions, in resolution order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Options for the HTML entry plugin
    #[serde(
        default,
        alias = "indexHTMLPlugin",
        alias = "indexHtmlPlugin",
        skip_serializing_if = "Option::is_none"
    )]
    pub index_html_plugin: Option<IndexHtmlOptions>,

    /// Per-plugin enable/disable overrides
    #[serde(default, skip_serializing_if = "PluginOverrides::is_empty")]
    pub plugins: PluginOverrides,
}

/// Caller overrides for the optional plugins. `None` keeps the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginOverrides {
    #[serde(
        default,
        alias = "indexHTML",
        alias = "indexHtml",
        skip_serializing_if = "Option::is_none"
    )]
    pub index_html: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workbox: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub babel: Option<bool>,
}

impl PluginOverrides {
    pub fn is_empty(&self) -> bool {
        self.index_html.is_none() && self.workbox.is_none() && self.babel.is_none()
    }
}

/// Resolved on/off state of the optional plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginFlags {
    pub index_html: bool,
    pub workbox: bool,
    pub babel: bool,
}

impl PluginFlags {
    /// Default flags for an entry: HTML handling follows the `.html` suffix,
    /// workbox and babel are on.
    pub fn defaults_for(input: &str) -> Self {
        Self {
            index_html: is_html_entry(input),
            workbox: true,
            babel: true,
        }
    }

    /// Shallow merge: every override that is set wins.
    pub fn with_overrides(self, overrides: PluginOverrides) -> Self {
        Self {
            index_html: overrides.index_html.unwrap_or(self.index_html),
            workbox: overrides.workbox.unwrap_or(self.workbox),
            babel: overrides.babel.unwrap_or(self.babel),
        }
    }
}

/// Options after defaults have been applied. Built once per config and never
/// mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub input: String,
    pub output_dir: PathBuf,
    pub extensions: Vec<String>,
    pub index_html_plugin: IndexHtmlOptions,
    pub plugins: PluginFlags,
}

impl BuildOptions {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            extensions: None,
            index_html_plugin: None,
            plugins: PluginOverrides::default(),
        }
    }

    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use wcb_config::BuildOptions;
    /// use serde_json::json;
    ///
    /// let options = BuildOptions::from_value(json!({
    ///     "input": "index.html",
    ///     "outputDir": "build"
    /// }))
    /// .unwrap();
    /// assert_eq!(options.input, "index.html");
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::invalid("options", e))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid("options", e))
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_index_html_plugin(mut self, options: IndexHtmlOptions) -> Self {
        self.index_html_plugin = Some(options);
        self
    }

    pub fn with_plugins(mut self, plugins: PluginOverrides) -> Self {
        self.plugins = plugins;
        self
    }

    /// Merge defaults with the caller's fields. Caller values win; the
    /// extension list falls back to `default_extensions` only when unset.
    pub fn resolve(self, default_extensions: impl FnOnce() -> Vec<String>) -> ResolvedOptions {
        let plugins = PluginFlags::defaults_for(&self.input).with_overrides(self.plugins);

        ResolvedOptions {
            output_dir: self.output_dir.unwrap_or_else(default_output_dir),
            extensions: self.extensions.unwrap_or_else(default_extensions),
            index_html_plugin: self.index_html_plugin.unwrap_or_default(),
            plugins,
            input: self.input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn html_input_enables_index_html_by_default() {
        let flags = PluginFlags::defaults_for("src/index.html");
        assert!(flags.index_html);
        assert!(flags.workbox);
        assert!(flags.babel);

        assert!(!PluginFlags::defaults_for("src/main.js").index_html);
    }

    #[test]
    fn suffix_check_is_exact() {
        assert!(!PluginFlags::defaults_for("index.htm").index_html);
        assert!(!PluginFlags::defaults_for("index.html.js").index_html);
        assert!(!PluginFlags::defaults_for("index.HTML").index_html);
    }

    #[test]
    fn overrides_shallow_merge_onto_defaults() {
        let flags = PluginFlags::defaults_for("main.js").with_overrides(PluginOverrides {
            index_html: Some(true),
            workbox: Some(false),
            babel: None,
        });
        assert!(flags.index_html);
        assert!(!flags.workbox);
        assert!(flags.babel);
    }

    #[test]
    fn resolve_fills_defaults() {
        let resolved = BuildOptions::new("index.html").resolve(|| vec![".js".to_string()]);
        assert_eq!(resolved.output_dir, PathBuf::from("dist"));
        assert_eq!(resolved.extensions, vec![".js".to_string()]);
        assert_eq!(resolved.index_html_plugin, IndexHtmlOptions::default());
        assert!(resolved.plugins.index_html);
    }

    #[test]
    fn resolve_keeps_caller_values() {
        let resolved = BuildOptions::new("main.js")
            .with_output_dir("build")
            .with_extensions([".ts"])
            .resolve(|| panic!("caller extensions must win"));
        assert_eq!(resolved.output_dir, PathBuf::from("build"));
        assert_eq!(resolved.extensions, vec![".ts".to_string()]);
    }

    #[test]
    fn explicit_empty_extension_list_is_kept() {
        let resolved = BuildOptions::new("main.js")
            .with_extensions(Vec::<String>::new())
            .resolve(|| vec![".js".to_string()]);
        assert!(resolved.extensions.is_empty());
    }

    #[test]
    fn from_value_accepts_camel_case_aliases() {
        let options = BuildOptions::from_value(json!({
            "input": "index.html",
            "outputDir": "out",
            "indexHTMLPlugin": { "minify": false },
            "plugins": { "indexHTML": false, "workbox": false }
        }))
        .unwrap();

        assert_eq!(options.output_dir, Some(PathBuf::from("out")));
        assert_eq!(options.plugins.index_html, Some(false));
        assert_eq!(options.plugins.workbox, Some(false));
        assert_eq!(options.plugins.babel, None);
        assert!(options.index_html_plugin.is_some());
    }

    #[test]
    fn from_value_requires_input() {
        let err = BuildOptions::from_value(json!({ "outputDir": "out" })).unwrap_err();
        assert!(err.to_string().contains("input"));
    }

    #[test]
    fn to_value_skips_unset_fields() {
        let value = BuildOptions::new("main.js").to_value().unwrap();
        assert_eq!(value, json!({ "input": "main.js" }));
    }
}
