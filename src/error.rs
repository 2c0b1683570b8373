//! Error types for sqltext.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    /// A result cell was read before a row was fetched, or after the cursor
    /// was exhausted or reset.
    #[error("accessing {0} in non-existing row")]
    NoCurrentRow(&'static str),
}

impl TextError {
    /// Create an invalid-row access error for the named operation.
    pub fn no_current_row(operation: &'static str) -> Self {
        Self::NoCurrentRow(operation)
    }
}

/// Result type alias for sqltext operations.
pub type TextResult<T> = Result<T, TextError>;
