//! Bundler configuration for ES-module web-component builds.
//!
//! [`create_config`] turns [`BuildOptions`] into a [`RollupConfig`]: the
//! input, an ESM output descriptor and an ordered list of plugin
//! descriptors. Whether the build is a production build is an explicit
//! [`BuildMode`]; [`BuildMode::from_env`] derives it from `ROLLUP_WATCH`.
//!
//! ```
//! use wcb_config::{create_config, BuildMode, BuildOptions, StaticToolchain};
//!
//! let config = create_config(
//!     BuildOptions::new("index.html").with_output_dir("build"),
//!     BuildMode::Production,
//!     &StaticToolchain::default(),
//! )
//! .unwrap();
//!
//! assert!(config.treeshake);
//! assert!(config.has_plugin("workbox"));
//! ```

pub mod builder;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod mode;
pub mod options;
pub mod plugins;
pub mod rollup;
pub mod toolchain;

pub use builder::create_config;
pub use discovery::ConfigDiscovery;
pub use error::{ConfigError, Result};
pub use loader::{OptionOverrides, OptionsLoader};
pub use mode::BuildMode;
pub use options::{
    BuildOptions, IndexHtmlOptions, PluginFlags, PluginOverrides, Polyfills, ResolvedOptions,
};
pub use plugins::*;
pub use rollup::{OutputFormat, OutputOptions, RollupConfig};
pub use toolchain::{ProjectToolchain, StaticToolchain, Toolchain};
