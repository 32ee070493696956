//! Validation error for phone-number input.

use thiserror::Error;

/// Rejection reason for a raw phone-number string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Cleaned input holds something other than digits after the optional
    /// leading `+` (letters, embedded `+`, punctuation we do not strip).
    #[error("phone number must contain only digits and an optional leading '+'")]
    NotDigitsAndPlus,
    /// Nothing left once separators and the `+` prefix are removed.
    #[error("phone number is empty after cleaning")]
    EmptyAfterCleaning,
}
