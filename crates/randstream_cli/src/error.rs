//! CLI error types.

use randstream_core::GeneratorError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// A generator could not be configured or a distribution rejected its
    /// parameters.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// A command-line argument is not acceptable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
