//! `walink example` – print the link for a canned example request.

use anyhow::Result;
use walink_core::link::{self, LinkRequest};

/// Sample request exercising phone cleanup and the full UTM set.
fn example_request() -> LinkRequest {
    LinkRequest {
        phone_raw: "+51 986 397 210".to_string(),
        message: "Hello, I would like a quote for a service visit.".to_string(),
        utm_source: "landing-page".to_string(),
        utm_medium: "button".to_string(),
        utm_campaign: "service-quote".to_string(),
        utm_content: "hero".to_string(),
        utm_term: "ice machines".to_string(),
    }
}

pub fn run_example() -> Result<()> {
    let req = example_request();
    let url = link::build(&req)?;
    println!("Number as entered: {}", req.phone_raw);
    println!("{url}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_request_builds() {
        let url = link::build(&example_request()).unwrap();
        assert!(url.starts_with("https://wa.me/51986397210?text="));
        assert!(url.contains("utm_term=ice+machines"));
    }
}
