use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Service worker file name written into the output directory
pub const SERVICE_WORKER_FILE: &str = "sw.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CachingStrategy {
    CacheFirst,
    CacheOnly,
    NetworkFirst,
    NetworkOnly,
    StaleWhileRevalidate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeCaching {
    pub url_pattern: String,
    pub handler: CachingStrategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// Options for workbox's `generateSW`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkboxConfig {
    pub sw_dest: PathBuf,
    pub glob_directory: PathBuf,
    pub glob_patterns: Vec<String>,
    pub skip_waiting: bool,
    pub clients_claim: bool,
    pub runtime_caching: Vec<RuntimeCaching>,

    /// Keys from a user override file that are not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkboxConfig {
    /// Precache html, js, css and manifests from the output directory and
    /// serve polyfills cache-first.
    pub fn for_output_dir(root: &Path, output_dir: &Path) -> Self {
        let out = root.join(output_dir);
        Self {
            sw_dest: out.join(SERVICE_WORKER_FILE),
            glob_directory: out,
            glob_patterns: vec!["**/*.{html,js,css,webmanifest}".to_string()],
            skip_waiting: true,
            clients_claim: true,
            runtime_caching: vec![RuntimeCaching {
                url_pattern: "polyfills/*.js".to_string(),
                handler: CachingStrategy::CacheFirst,
                options: None,
            }],
            extra: Map::new(),
        }
    }

    /// Shallow merge: top-level keys in `overrides` replace ours.
    pub fn merge_overrides(self, overrides: Map<String, Value>) -> Result<Self> {
        if overrides.is_empty() {
            return Ok(self);
        }

        let mut base = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(ConfigError::invalid(
                    "workbox",
                    format!("expected an object, got {other}"),
                ));
            }
            Err(e) => return Err(ConfigError::invalid("workbox", e)),
        };
        base.extend(overrides);

        serde_json::from_value(Value::Object(base)).map_err(|e| ConfigError::invalid("workbox", e))
    }
}
