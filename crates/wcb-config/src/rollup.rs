//! The configuration object handed to the bundler.

use serde::Serialize;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::plugins::PluginSpec;

/// Runtime global that intercepts dynamic `import()` calls
pub const DYNAMIC_IMPORT_FUNCTION: &str = "importShim";

/// Naming template for both entry and chunk files
pub const FILE_NAME_TEMPLATE: &str = "[name]-[hash].js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Esm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub dir: PathBuf,
    pub format: OutputFormat,
    pub sourcemap: bool,
    pub dynamic_import_function: String,
    pub entry_file_names: String,
    pub chunk_file_names: String,
}

impl OutputOptions {
    /// ESM output with source maps and hashed file names.
    pub fn esm(dir: PathBuf) -> Self {
        Self {
            dir,
            format: OutputFormat::Esm,
            sourcemap: true,
            dynamic_import_function: DYNAMIC_IMPORT_FUNCTION.to_string(),
            entry_file_names: FILE_NAME_TEMPLATE.to_string(),
            chunk_file_names: FILE_NAME_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollupConfig {
    pub input: String,
    pub treeshake: bool,
    pub output: OutputOptions,
    pub plugins: Vec<PluginSpec>,
}

impl RollupConfig {
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(PluginSpec::name).collect()
    }

    pub fn plugin(&self, name: &str) -> Option<&PluginSpec> {
        self.plugins.iter().find(|p| p.name() == name)
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugin(name).is_some()
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| ConfigError::invalid("config", e))
    }
}
