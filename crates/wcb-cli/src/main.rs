//! wcb - bundler configuration for web-component builds.

use clap::Parser;
use miette::Result;
use wcb_cli::{cli, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    wcb_cli::run(args).map_err(error::cli_error_to_miette)
}
