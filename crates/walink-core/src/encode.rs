//! Query-string value encoding for wa.me links.
//!
//! Two conventions coexist in one URL: the pre-filled message is
//! percent-encoded with spaces as `%20`, while UTM values are form-encoded
//! with spaces as `+`. The receiving platform decodes the two fields
//! differently, so the distinction is load-bearing.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Escape everything except ASCII alphanumerics and the unreserved
/// characters `-`, `_`, `.`, `~`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a message value; a literal space becomes `%20`.
pub fn percent_encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Form-encodes a tracking value; a literal space becomes `+`, everything
/// else follows the same escaping as [`percent_encode_component`].
pub fn form_encode_component(value: &str) -> String {
    value
        .split(' ')
        .map(|chunk| utf8_percent_encode(chunk, QUERY_VALUE).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_is_percent20_in_message() {
        assert_eq!(percent_encode_component("Hola mundo"), "Hola%20mundo");
    }

    #[test]
    fn space_is_plus_in_tracking_value() {
        assert_eq!(form_encode_component("ice machines"), "ice+machines");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(percent_encode_component("a&b=c?d/e"), "a%26b%3Dc%3Fd%2Fe");
        assert_eq!(form_encode_component("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(percent_encode_component("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(form_encode_component("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn literal_plus_is_escaped_in_both() {
        assert_eq!(percent_encode_component("1+1"), "1%2B1");
        assert_eq!(form_encode_component("1+1"), "1%2B1");
    }

    #[test]
    fn utf8_is_escaped_bytewise() {
        assert_eq!(percent_encode_component("café"), "caf%C3%A9");
        assert_eq!(form_encode_component("niño feliz"), "ni%C3%B1o+feliz");
    }

    #[test]
    fn empty_value_stays_empty() {
        assert_eq!(percent_encode_component(""), "");
        assert_eq!(form_encode_component(""), "");
    }
}
