//! File-based options discovery for CLI use
//!
//! Handles finding and loading wcb options files from a project directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::loader::OptionsLoader;
use crate::options::BuildOptions;

pub const CONFIG_FILE: &str = "wcb.toml";
pub const PACKAGE_JSON: &str = "package.json";
/// Field of `package.json` that holds the options
pub const PACKAGE_JSON_FIELD: &str = "wcb";

/// File-based options discovery
///
/// Library users should build [`BuildOptions`] directly or use
/// [`BuildOptions::from_value`].
///
/// # Example
///
/// ```no_run
/// use wcb_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let options = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find an options file in the root directory
    ///
    /// Searches in this order:
    /// 1. `wcb.toml`
    /// 2. `package.json` with a non-null `wcb` field
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load options from the discovered file, without environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no options file is found.
    pub fn load(&self) -> Result<BuildOptions> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        OptionsLoader::new(&self.root)
            .config_file(path)
            .without_env()
            .load()
    }
}
