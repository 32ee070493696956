//! `walink build <phone>` – build and print a wa.me link.

use anyhow::Result;
use walink_core::config::WalinkConfig;
use walink_core::link;

use crate::cli::{to_link_request, UtmArgs};

pub fn run_build(
    cfg: &WalinkConfig,
    phone: &str,
    message: &str,
    utm: UtmArgs,
    json: bool,
) -> Result<()> {
    let req = to_link_request(phone, message, utm, cfg);
    let url = link::build(&req)?;
    if json {
        println!("{}", serde_json::json!({ "url": url }));
    } else {
        println!("{url}");
    }
    Ok(())
}
