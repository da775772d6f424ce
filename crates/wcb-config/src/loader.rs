//! Layered option loading.
//!
//! Priority: explicit overrides > `WCB_` environment variables > options
//! file. Nested keys in the environment are separated by `__`, so
//! `WCB_PLUGINS__WORKBOX=false` disables the service worker.

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::discovery::{ConfigDiscovery, PACKAGE_JSON, PACKAGE_JSON_FIELD};
use crate::error::{ConfigError, Result};
use crate::options::{BuildOptions, IndexHtmlOptions, PluginOverrides};

pub const ENV_PREFIX: &str = "WCB_";

/// Highest-priority layer, usually built from CLI flags. Unset fields do not
/// touch lower layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_html_plugin: Option<IndexHtmlOptions>,

    #[serde(skip_serializing_if = "PluginOverrides::is_empty")]
    pub plugins: PluginOverrides,
}

#[derive(Debug, Clone)]
pub struct OptionsLoader {
    root: PathBuf,
    config_file: Option<PathBuf>,
    use_env: bool,
    overrides: OptionOverrides,
}

impl OptionsLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config_file: None,
            use_env: true,
            overrides: OptionOverrides::default(),
        }
    }

    /// Use this file instead of discovery. Relative paths are taken from the
    /// root.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    pub fn overrides(mut self, overrides: OptionOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// The options file this loader reads, if any.
    fn options_file(&self) -> Option<PathBuf> {
        match &self.config_file {
            Some(path) => Some(self.root.join(path)),
            None => ConfigDiscovery::new(&self.root).find(),
        }
    }

    /// The merged provider stack, before extraction
    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::new();

        if let Some(path) = self.options_file() {
            tracing::debug!(path = %path.display(), "loading options file");
            figment = figment.merge(Serialized::defaults(read_options_file(&path)?));
        }

        if self.use_env {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        }

        Ok(figment.merge(Serialized::defaults(&self.overrides)))
    }

    /// Extract [`BuildOptions`] from every layer.
    ///
    /// Returns [`ConfigError::NotFound`] when no options file exists and
    /// neither the environment nor the overrides name an `input`.
    pub fn load(&self) -> Result<BuildOptions> {
        let figment = self.figment()?;
        if !figment.contains("input") && self.options_file().is_none() {
            return Err(ConfigError::NotFound);
        }

        figment.extract().map_err(|e| {
            let field = if e.path.is_empty() {
                "options".to_string()
            } else {
                e.path.join(".")
            };
            ConfigError::InvalidValue {
                field,
                hint: Some(e.to_string()),
            }
        })
    }
}

/// Read an options file into a JSON value with canonical key names.
///
/// `package.json` contributes only its `wcb` field. Other `.json` files are
/// read whole; anything else is parsed as TOML.
fn read_options_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_package_json = path.file_name() == Some(std::ffi::OsStr::new(PACKAGE_JSON));
    let is_json = path.extension().is_some_and(|ext| ext == "json");

    let value = if is_package_json {
        let mut parsed: Value = serde_json::from_str(&content)
            .map_err(|e| ConfigError::invalid(PACKAGE_JSON, format!("Invalid JSON: {e}")))?;
        match parsed.get_mut(PACKAGE_JSON_FIELD).map(Value::take) {
            Some(field) if !field.is_null() => field,
            _ => {
                return Err(ConfigError::invalid(
                    PACKAGE_JSON_FIELD,
                    "Add a 'wcb' field to your package.json",
                ));
            }
        }
    } else if is_json {
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::invalid("json", format!("Invalid JSON: {e}")))?
    } else {
        let toml_val: toml::Value = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid("toml", format!("Invalid TOML syntax: {e}")))?;
        serde_json::to_value(toml_val).map_err(|e| {
            ConfigError::invalid("toml", format!("TOML to JSON conversion failed: {e}"))
        })?
    };

    Ok(canonicalize_keys(value))
}

/// Rename the camelCase spellings JS projects use to the snake_case keys the
/// other layers use, so merging never sees the same field under two names.
fn canonicalize_keys(mut value: Value) -> Value {
    if let Value::Object(map) = &mut value {
        rename_keys(
            map,
            &[
                ("outputDir", "output_dir"),
                ("indexHTMLPlugin", "index_html_plugin"),
                ("indexHtmlPlugin", "index_html_plugin"),
            ],
        );
        if let Some(Value::Object(plugins)) = map.get_mut("plugins") {
            rename_keys(
                plugins,
                &[("indexHTML", "index_html"), ("indexHtml", "index_html")],
            );
        }
    }
    value
}

fn rename_keys(map: &mut Map<String, Value>, pairs: &[(&str, &str)]) {
    for (from, to) in pairs {
        if let Some(v) = map.remove(*from) {
            map.entry(to.to_string()).or_insert(v);
        }
    }
}
