//! Production vs. watch build mode.

use serde::{Deserialize, Serialize};

/// Environment variable the bundler sets while running in watch mode.
pub const WATCH_ENV_VAR: &str = "ROLLUP_WATCH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// One-shot build: tree-shaking, minification and service worker on
    #[default]
    Production,
    /// Continuous rebuilds while developing
    Watch,
}

impl BuildMode {
    /// Read the mode from `ROLLUP_WATCH`.
    ///
    /// Any non-empty value means watch mode. Reads the environment on every
    /// call; nothing is cached.
    pub fn from_env() -> Self {
        Self::from_watch_var(std::env::var_os(WATCH_ENV_VAR).as_deref())
    }

    pub(crate) fn from_watch_var(value: Option<&std::ffi::OsStr>) -> Self {
        match value {
            Some(v) if !v.is_empty() => BuildMode::Watch,
            _ => BuildMode::Production,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildMode::Production => write!(f, "production"),
            BuildMode::Watch => write!(f, "watch"),
        }
    }
}
