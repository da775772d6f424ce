//! wcb CLI - print and check bundler configurations.
//!
//! The binary is a thin layer over `wcb-config`:
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `config` and `check`
//! - [`error`] - CLI errors and miette reporting
//! - [`logger`] - tracing setup
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```rust,no_run
//! use wcb_cli::{Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};

/// Run a parsed command line.
pub fn run(args: cli::Cli) -> Result<()> {
    let cwd = args.cwd.as_deref();
    match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args, cwd),
        cli::Command::Check(check_args) => commands::check_execute(check_args, cwd),
    }
}
