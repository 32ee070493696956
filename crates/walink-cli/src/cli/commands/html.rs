//! `walink html <phone>` – build a link and print it as an anchor snippet.

use anyhow::Result;
use walink_core::config::WalinkConfig;
use walink_core::{html, link};

use crate::cli::{to_link_request, UtmArgs};

pub fn run_html(
    cfg: &WalinkConfig,
    phone: &str,
    message: &str,
    utm: UtmArgs,
    label: Option<String>,
) -> Result<()> {
    let req = to_link_request(phone, message, utm, cfg);
    let url = link::build(&req)?;
    let label = label.unwrap_or_else(|| cfg.html_label.clone());
    println!("{}", html::anchor_snippet(&url, &label));
    Ok(())
}
