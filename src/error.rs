//! Error handling for the docforge build stage.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors surfaced while building the project model.
///
/// Absent optional inputs (no token file, no descriptions, no images) are
/// never errors; only filesystem failures and navigation parse failures
/// abort the stage.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors in the project configuration file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors surfaced by the navigation file parser
    #[error("Navigation error: {0}.")]
    NavigationError(String),
}

/// Convenience type alias for Results with docforge's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
