//! Delegated build capabilities.
//!
//! The builder never decides browser targets, default extensions, the CSS
//! minify callback or workbox options itself; it asks a [`Toolchain`].
//! [`ProjectToolchain`] answers from a project directory on disk,
//! [`StaticToolchain`] from fixed values.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::plugins::{CssMinifier, WorkboxConfig};

/// Extensions recognized when the caller does not pass any
pub const DEFAULT_EXTENSIONS: &[&str] = &[".mjs", ".js", ".ts", ".jsx", ".tsx"];

/// Browserslist queries used when the project declares none
pub const DEFAULT_BROWSERS: &[&str] = &[
    "last 2 Chrome major versions",
    "last 2 ChromeAndroid major versions",
    "last 2 Firefox major versions",
    "last 2 Edge major versions",
    "last 2 Safari major versions",
    "last 2 iOS major versions",
];

pub const BROWSERSLIST_RC: &str = ".browserslistrc";
pub const WORKBOX_OVERRIDE_FILE: &str = "workbox-config.json";

pub trait Toolchain {
    /// Browserslist queries for the browsers the build supports
    fn supported_browsers(&self) -> Result<Vec<String>>;

    fn default_extensions(&self) -> Vec<String> {
        to_strings(DEFAULT_EXTENSIONS)
    }

    fn css_minifier(&self) -> CssMinifier {
        CssMinifier::default()
    }

    /// Workbox `generateSW` options for an output directory
    fn workbox_config(&self, output_dir: &Path) -> Result<WorkboxConfig>;
}

/// Toolchain backed by a project directory.
///
/// Browser targets come from `package.json`'s `browserslist` field, then
/// `.browserslistrc`, then [`DEFAULT_BROWSERS`]. Workbox options start from
/// the defaults and take a shallow override from `workbox-config.json`.
#[derive(Debug, Clone)]
pub struct ProjectToolchain {
    root: PathBuf,
}

impl ProjectToolchain {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn browsers_from_package_json(&self) -> Result<Option<Vec<String>>> {
        let path = self.root.join("package.json");
        let Some(parsed) = read_json(&path)? else {
            return Ok(None);
        };

        match parsed.get("browserslist") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(query)) => Ok(Some(split_queries(query))),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        ConfigError::invalid("browserslist", "entries must be strings")
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(Some),
            Some(_) => Err(ConfigError::invalid(
                "browserslist",
                "expected a string or an array of strings",
            )),
        }
    }

    fn browsers_from_rc(&self) -> Result<Option<Vec<String>>> {
        let path = self.root.join(BROWSERSLIST_RC);
        let Some(content) = read_optional(&path)? else {
            return Ok(None);
        };

        let queries: Vec<String> = content
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default().trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Ok((!queries.is_empty()).then_some(queries))
    }
}

impl Toolchain for ProjectToolchain {
    fn supported_browsers(&self) -> Result<Vec<String>> {
        if let Some(browsers) = self.browsers_from_package_json()? {
            debug!(count = browsers.len(), "browser targets from package.json");
            return Ok(browsers);
        }
        if let Some(browsers) = self.browsers_from_rc()? {
            debug!(count = browsers.len(), "browser targets from {}", BROWSERSLIST_RC);
            return Ok(browsers);
        }
        Ok(to_strings(DEFAULT_BROWSERS))
    }

    fn workbox_config(&self, output_dir: &Path) -> Result<WorkboxConfig> {
        let config = WorkboxConfig::for_output_dir(&self.root, output_dir);

        let path = self.root.join(WORKBOX_OVERRIDE_FILE);
        match read_json(&path)? {
            None => Ok(config),
            Some(Value::Object(overrides)) => {
                debug!(keys = overrides.len(), "applying {}", WORKBOX_OVERRIDE_FILE);
                config.merge_overrides(overrides)
            }
            Some(_) => Err(ConfigError::invalid(
                WORKBOX_OVERRIDE_FILE,
                "expected a JSON object",
            )),
        }
    }
}

/// Toolchain with fixed answers, for tests and embedding.
#[derive(Debug, Clone)]
pub struct StaticToolchain {
    pub root: PathBuf,
    pub browsers: Vec<String>,
    pub extensions: Vec<String>,
    pub css_minifier: CssMinifier,
    pub workbox_overrides: Map<String, Value>,
}

impl Default for StaticToolchain {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            browsers: to_strings(DEFAULT_BROWSERS),
            extensions: to_strings(DEFAULT_EXTENSIONS),
            css_minifier: CssMinifier::default(),
            workbox_overrides: Map::new(),
        }
    }
}

impl Toolchain for StaticToolchain {
    fn supported_browsers(&self) -> Result<Vec<String>> {
        Ok(self.browsers.clone())
    }

    fn default_extensions(&self) -> Vec<String> {
        self.extensions.clone()
    }

    fn css_minifier(&self) -> CssMinifier {
        self.css_minifier.clone()
    }

    fn workbox_config(&self, output_dir: &Path) -> Result<WorkboxConfig> {
        WorkboxConfig::for_output_dir(&self.root, output_dir)
            .merge_overrides(self.workbox_overrides.clone())
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Browserslist accepts comma separated queries in a single string
fn split_queries(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn read_json(path: &Path) -> Result<Option<Value>> {
    let Some(content) = read_optional(path)? else {
        return Ok(None);
    };
    let field = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::invalid(field, format!("Invalid JSON: {e}")))
}
