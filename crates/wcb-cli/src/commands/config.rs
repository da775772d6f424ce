//! `wcb config`: print the assembled bundler configuration.

use std::fs;
use std::path::Path;

use crate::cli::ConfigArgs;
use crate::commands::{load_config, project_root};
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the config command.
///
/// Writes JSON to stdout, or to `--out` relative to the project root.
///
/// # Errors
///
/// Returns option loading, toolchain and I/O failures, and
/// [`CliError::InvalidArgument`] when `--out` names a directory.
pub fn execute(args: ConfigArgs, cwd: Option<&Path>) -> Result<()> {
    let root = project_root(cwd)?;
    let loaded = load_config(&root, &args.options)?;
    let json = loaded.config.to_json(!args.compact)?;

    match args.out {
        Some(path) => {
            let path = root.join(path);
            if path.is_dir() {
                return Err(CliError::InvalidArgument(format!(
                    "--out is a directory: {}",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, format!("{json}\n"))?;
            ui::success(&format!("Config written to {}", path.display()));
        }
        None => println!("{json}"),
    }

    Ok(())
}
