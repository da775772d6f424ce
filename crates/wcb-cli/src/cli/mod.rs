//! Command-line interface definition for wcb.
//!
//! # Command Structure
//!
//! - `wcb config` - Print the assembled bundler configuration
//! - `wcb check` - Summarize the build mode and plugin list

mod commands;
pub mod enums;
mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{CheckArgs, Command, ConfigArgs, OptionArgs};
pub use enums::*;
pub use validation::parse_extension;

/// wcb - bundler configuration for web-component builds
#[derive(Parser, Debug)]
#[command(
    name = "wcb",
    version,
    about = "Bundler configuration for web-component builds",
    long_about = "wcb assembles the bundler configuration for an ES-module web-component build:\n\
                  HTML entry handling, module resolution, babel, minification and service\n\
                  worker generation, chosen from a few flags and the build mode."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project directory (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
