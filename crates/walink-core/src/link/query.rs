//! Query-string assembly with the mandated parameter order.

use super::LinkRequest;
use crate::encode;

/// UTM parameters in their mandated order.
fn utm_fields(req: &LinkRequest) -> [(&'static str, &str); 5] {
    [
        ("utm_source", req.utm_source.as_str()),
        ("utm_medium", req.utm_medium.as_str()),
        ("utm_campaign", req.utm_campaign.as_str()),
        ("utm_content", req.utm_content.as_str()),
        ("utm_term", req.utm_term.as_str()),
    ]
}

/// Assembles the query string: `text` first, then every non-empty UTM value.
pub(super) fn assemble(req: &LinkRequest) -> String {
    let mut segments = vec![format!(
        "text={}",
        encode::percent_encode_component(&req.message)
    )];

    for (name, value) in utm_fields(req) {
        let value = value.trim();
        if !value.is_empty() {
            segments.push(format!("{name}={}", encode::form_encode_component(value)));
        }
    }

    segments.join("&")
}
