//! Error types for structured error handling.
//!
//! Every sequence constructor validates its preconditions before any entropy is
//! consumed and reports violations through [`GeneratorError`]. Internal
//! rejection-sampling loops are deterministic and never surface as errors.

use thiserror::Error;

/// Categorised generator errors.
///
/// # Variants
/// - `InvalidSeed`: seed array of the wrong length
/// - `InvalidScale`: a scale parameter is incompatible with the requested sequence
/// - `InvalidArgument`: an argument lies outside the sequence's domain
/// - `Config`: a configuration source could not be parsed
///
/// # Examples
/// ```
/// use randstream_core::GeneratorError;
///
/// let err = GeneratorError::InvalidSeed { expected: 8, got: 3 };
/// assert_eq!(format!("{}", err), "Invalid seed: expected 8 words, got 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Seed array does not have exactly the required number of words.
    #[error("Invalid seed: expected {expected} words, got {got}")]
    InvalidSeed {
        /// Required seed length
        expected: usize,
        /// Length that was supplied
        got: usize,
    },

    /// A scale parameter does not satisfy the sequence's precondition.
    #[error("Invalid scale: {0}")]
    InvalidScale(String),

    /// An argument is outside the domain of the requested sequence.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration source could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeneratorError>;
