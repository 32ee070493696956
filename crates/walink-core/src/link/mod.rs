//! wa.me link assembly.
//!
//! Produces `https://wa.me/<digits>?text=...` with tracking parameters in a
//! fixed order. `text` always leads the query, even when empty, so generated
//! links stay uniform across campaigns.

mod query;

use crate::phone::{self, ValidationError};

/// Base URL for the chat deep link.
const WA_ME_BASE: &str = "https://wa.me/";

/// One link-build request. An empty string means "field absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRequest {
    /// Phone number as entered; may contain `+`, spaces, hyphens, parentheses.
    pub phone_raw: String,
    /// Free-text message to pre-fill in the chat, may be empty.
    pub message: String,
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_content: String,
    pub utm_term: String,
}

/// Builds the final wa.me URL for `req`.
///
/// Fails only on phone-number validation; every other field is encoded
/// as-is. Pure: identical requests always yield the identical URL.
pub fn build(req: &LinkRequest) -> Result<String, ValidationError> {
    let number = phone::normalize(&req.phone_raw)?;
    Ok(format!("{WA_ME_BASE}{number}?{}", query::assemble(req)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(phone: &str, message: &str, utm: [&str; 5]) -> LinkRequest {
        LinkRequest {
            phone_raw: phone.to_string(),
            message: message.to_string(),
            utm_source: utm[0].to_string(),
            utm_medium: utm[1].to_string(),
            utm_campaign: utm[2].to_string(),
            utm_content: utm[3].to_string(),
            utm_term: utm[4].to_string(),
        }
    }

    #[test]
    fn build_message_and_source_only() {
        let req = request("51977876360", "Hola", ["src", "", "", "", ""]);
        assert_eq!(
            build(&req).unwrap(),
            "https://wa.me/51977876360?text=Hola&utm_source=src"
        );
    }

    #[test]
    fn build_empty_message_keeps_text_key() {
        let req = request("51977876360", "", ["", "", "", "", ""]);
        assert_eq!(build(&req).unwrap(), "https://wa.me/51977876360?text=");
    }

    #[test]
    fn build_all_utm_fields_in_fixed_order() {
        let req = request(
            "+51 986 397 210",
            "Hola",
            ["landing", "button", "promo", "hero", "ice"],
        );
        assert_eq!(
            build(&req).unwrap(),
            "https://wa.me/51986397210?text=Hola&utm_source=landing&utm_medium=button\
             &utm_campaign=promo&utm_content=hero&utm_term=ice"
        );
    }

    #[test]
    fn build_skips_absent_fields_without_empty_pairs() {
        let req = request("51977876360", "Hi", ["", "mail", "", "", "kw"]);
        let url = build(&req).unwrap();
        assert_eq!(
            url,
            "https://wa.me/51977876360?text=Hi&utm_medium=mail&utm_term=kw"
        );
        assert!(!url.contains("utm_source="));
        assert!(!url.contains("=&"));
    }

    #[test]
    fn build_message_space_is_percent20_utm_space_is_plus() {
        let req = request("51977876360", "Hola mundo", ["mi fuente", "", "", "", ""]);
        assert_eq!(
            build(&req).unwrap(),
            "https://wa.me/51977876360?text=Hola%20mundo&utm_source=mi+fuente"
        );
    }

    #[test]
    fn build_trims_utm_values_before_use() {
        let req = request("51977876360", "", ["  src  ", "   ", "", "", ""]);
        assert_eq!(
            build(&req).unwrap(),
            "https://wa.me/51977876360?text=&utm_source=src"
        );
    }

    #[test]
    fn build_propagates_phone_validation_failure() {
        let req = request("not a number", "Hola", ["src", "", "", "", ""]);
        assert_eq!(build(&req), Err(ValidationError::NotDigitsAndPlus));
        let req = request("+", "Hola", ["", "", "", "", ""]);
        assert_eq!(build(&req), Err(ValidationError::EmptyAfterCleaning));
    }

    #[test]
    fn build_is_pure_across_calls() {
        let req = request("51977876360", "Hola mundo", ["a", "b", "c", "d", "e"]);
        assert_eq!(build(&req).unwrap(), build(&req).unwrap());
    }
}
