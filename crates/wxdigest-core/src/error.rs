//! Error types for wxdigest-core.
//!
//! Malformed upstream data is fatal and surfaces as [`WxDigestError::InputMalformed`].
//! Unmapped condition codes and missing periods are not errors and never appear here.

use thiserror::Error;

/// The main error type for wxdigest operations.
#[derive(Debug, Error)]
pub enum WxDigestError {
    /// Raw forecast response is unusable (bad timestamp, missing field, out-of-range value).
    #[error("Malformed input: {0}")]
    InputMalformed(String),

    /// Invalid fixed UTC offset provided.
    #[error("Invalid offset: {0}")]
    InvalidOffset(String),

    /// Error parsing an option value (strategy, condition name, ...).
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl WxDigestError {
    /// Whether this error was caused by the forecast payload itself.
    pub fn is_input_malformed(&self) -> bool {
        matches!(self, WxDigestError::InputMalformed(_))
    }
}

/// Result type alias for wxdigest operations.
pub type Result<T> = std::result::Result<T, WxDigestError>;
