//! Miette report conversion for CLI errors.

use crate::error::CliError;
use miette::Report;
use wcb_config::ConfigError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NotFound => miette::miette!(
            help = "Create a wcb.toml, add a \"wcb\" field to package.json, or pass --input",
            "No build options found"
        ),
        ConfigError::InvalidValue { field, hint } => match hint {
            Some(hint) => miette::miette!(help = hint, "Invalid value for '{}'", field),
            None => miette::miette!("Invalid value for '{}'", field),
        },
        ConfigError::Read { path, source } => miette::miette!(
            help = "Check that the file exists and is readable",
            "Failed to read {}: {}",
            path.display(),
            source
        ),
        other => miette::miette!("{}", other),
    }
}
