//! Phone-number normalization for wa.me URLs.
//!
//! wa.me takes the international number as bare digits: no `+`, no
//! separators. Input arrives however the user pasted it, so spaces,
//! hyphens, and parentheses are stripped before validation.

mod error;

pub use error::ValidationError;

/// Separator characters users commonly paste along with a number.
const SEPARATORS: [char; 4] = [' ', '-', '(', ')'];

/// Normalizes a raw phone-number string to the digit-only form wa.me expects.
///
/// - Trims surrounding whitespace, then drops interior spaces, hyphens, and
///   parentheses.
/// - The remainder must be an optional single leading `+` followed by one or
///   more decimal digits.
/// - The leading `+` is stripped from the result.
///
/// # Examples
///
/// - `normalize("+51 986 397 210")` → `"51986397210"`
/// - `normalize("51-986-397-210")` → `"51986397210"`
pub fn normalize(raw: &str) -> Result<String, ValidationError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !SEPARATORS.contains(c))
        .collect();

    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    if digits.is_empty() {
        return Err(ValidationError::EmptyAfterCleaning);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotDigitsAndPlus);
    }
    Ok(digits.to_string())
}
