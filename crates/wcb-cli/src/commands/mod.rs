//! Command implementations for the wcb CLI.
//!
//! - [`config`] - Print the bundler configuration
//! - [`check`] - Summarize the build without printing JSON
//!
//! Both commands share [`load_config`], which layers the options file,
//! `WCB_*` environment variables and command-line flags before handing the
//! result to [`wcb_config::create_config`].

pub mod check;
pub mod config;

pub use check::execute as check_execute;
pub use config::execute as config_execute;

use std::path::{Path, PathBuf};

use wcb_config::{
    BuildMode, OptionOverrides, OptionsLoader, PluginOverrides, ProjectToolchain, RollupConfig,
    create_config,
};

use crate::cli::OptionArgs;
use crate::error::{Result, ResultExt};

/// Everything a command needs after loading
#[derive(Debug)]
pub struct LoadedConfig {
    pub mode: BuildMode,
    pub config: RollupConfig,
}

/// Resolve the project directory from `--cwd` or the process directory.
pub fn project_root(cwd: Option<&Path>) -> Result<PathBuf> {
    match cwd {
        Some(dir) => {
            let dir = dir.canonicalize().with_path(dir)?;
            Ok(dir)
        }
        None => Ok(std::env::current_dir()?),
    }
}

/// Map command-line flags onto the highest-priority option layer.
pub fn overrides_from_args(args: &OptionArgs) -> OptionOverrides {
    OptionOverrides {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        extensions: (!args.extensions.is_empty()).then(|| args.extensions.clone()),
        index_html_plugin: None,
        plugins: PluginOverrides {
            index_html: args.index_html,
            workbox: args.workbox,
            babel: args.babel,
        },
    }
}

/// Load options for `root` and build the bundler configuration.
pub fn load_config(root: &Path, args: &OptionArgs) -> Result<LoadedConfig> {
    let mode = args.mode.map(BuildMode::from).unwrap_or_else(BuildMode::from_env);

    let mut loader = OptionsLoader::new(root).overrides(overrides_from_args(args));
    if let Some(path) = &args.config {
        loader = loader.config_file(path);
    }

    let options = loader.load()?;
    tracing::debug!(input = %options.input, %mode, "loaded build options");

    let toolchain = ProjectToolchain::new(root);
    let config = create_config(options, mode, &toolchain)?;

    Ok(LoadedConfig { mode, config })
}
