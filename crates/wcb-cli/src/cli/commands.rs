use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::Mode;
use crate::cli::validation::parse_extension;

/// Available wcb subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the bundler configuration as JSON
    ///
    /// Loads options from wcb.toml or package.json, applies WCB_* environment
    /// variables and command-line overrides, and prints the configuration the
    /// bundler should run with.
    Config(ConfigArgs),

    /// Show which plugins a build would run
    ///
    /// Loads the same options as `wcb config` and reports the build mode,
    /// output directory and plugin list without printing the full JSON.
    Check(CheckArgs),
}

/// Option sources and overrides shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Options file to load instead of discovering wcb.toml / package.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Entry module or HTML file
    ///
    /// An input ending in `.html` enables the HTML entry plugin unless
    /// `--index-html false` is given.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<String>,

    /// Output directory for the bundle
    #[arg(short = 'd', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Source file extension (repeatable); replaces the default list
    ///
    /// Examples:
    ///   wcb config --extension .js --extension .ts
    #[arg(short = 'e', long = "extension", value_name = "EXT", value_parser = parse_extension)]
    pub extensions: Vec<String>,

    /// Enable or disable the HTML entry plugin
    #[arg(long, value_name = "BOOL")]
    pub index_html: Option<bool>,

    /// Enable or disable babel transpilation
    #[arg(long, value_name = "BOOL")]
    pub babel: Option<bool>,

    /// Enable or disable service worker generation
    #[arg(long, value_name = "BOOL")]
    pub workbox: Option<bool>,

    /// Build mode; defaults to watch when ROLLUP_WATCH is set, else production
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub options: OptionArgs,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Write the JSON to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub options: OptionArgs,
}
