//! Error types for the site core library.

use thiserror::Error;

/// Main error type for SEO normalization and rule composition operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input outside the documented domain of a normalizer function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Regex error
    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Type alias for Result with CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
