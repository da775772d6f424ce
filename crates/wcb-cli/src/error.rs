//! Error handling for the wcb CLI.
//!
//! Library failures arrive as [`wcb_config::ConfigError`] and are wrapped in
//! [`CliError`]. `main` turns the final error into a miette report.
//!
//! # Example
//!
//! ```rust,no_run
//! use wcb_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_input(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod miette;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Option loading, discovery or toolchain failures
    #[error("Configuration error: {0}")]
    Config(#[from] wcb_config::ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Attach context to fallible operations.
pub trait ResultExt<T> {
    /// Report a missing path as [`CliError::FileNotFound`].
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error_conversion() {
        let err: CliError = wcb_config::ConfigError::NotFound.into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("config not found"));
    }

    #[test]
    fn test_with_path_maps_not_found() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err = result.with_path("wcb.toml").unwrap_err();
        match err {
            CliError::FileNotFound(path) => assert_eq!(path, PathBuf::from("wcb.toml")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_with_path_keeps_other_io_errors() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(
            result.with_path("wcb.toml").unwrap_err(),
            CliError::Io(_)
        ));
    }
}
