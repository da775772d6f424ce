//! Descriptors for the pre-built bundler plugins.
//!
//! A descriptor names a plugin and carries its options; the bundler host
//! instantiates the actual plugin from it.

mod babel;
mod workbox;

use serde::Serialize;

pub use babel::{
    BabelOptions, BabelPlugin, BabelPreset, CssMinifier, HtmlMinifierOptions, PresetEnvOptions,
    TemplateHtmlMinifierOptions, TemplateTag,
};
pub use workbox::{CachingStrategy, RuntimeCaching, SERVICE_WORKER_FILE, WorkboxConfig};

use crate::options::IndexHtmlOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
}

/// One entry in the bundler's plugin list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", content = "options")]
pub enum PluginSpec {
    /// Reads an HTML file as input and feeds its module scripts to the bundler
    #[serde(rename = "index-html")]
    IndexHtml(IndexHtmlOptions),
    /// Resolves bare import specifiers
    #[serde(rename = "node-resolve")]
    Resolve(ResolveOptions),
    #[serde(rename = "babel")]
    Babel(BabelOptions),
    #[serde(rename = "terser")]
    Terser,
    /// Service worker generation (`generateSW`)
    #[serde(rename = "workbox")]
    Workbox(WorkboxConfig),
}

impl PluginSpec {
    pub fn name(&self) -> &'static str {
        match self {
            PluginSpec::IndexHtml(_) => "index-html",
            PluginSpec::Resolve(_) => "node-resolve",
            PluginSpec::Babel(_) => "babel",
            PluginSpec::Terser => "terser",
            PluginSpec::Workbox(_) => "workbox",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_name_and_options() {
        let spec = PluginSpec::Resolve(ResolveOptions {
            extensions: vec![".js".to_string()],
        });
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({ "name": "node-resolve", "options": { "extensions": [".js"] } })
        );
    }

    #[test]
    fn terser_has_no_options() {
        assert_eq!(
            serde_json::to_value(PluginSpec::Terser).unwrap(),
            json!({ "name": "terser" })
        );
    }

    #[test]
    fn name_matches_serialized_tag() {
        let spec = PluginSpec::IndexHtml(IndexHtmlOptions::default());
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["name"], json!(spec.name()));
    }
}
