//! CLI for the walink wa.me link builder.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use walink_core::config::{self, WalinkConfig};
use walink_core::link::LinkRequest;

use commands::{run_build, run_example, run_html};

/// Top-level CLI for the walink link builder.
#[derive(Debug, Parser)]
#[command(name = "walink")]
#[command(about = "walink: wa.me chat-link builder with UTM tracking", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Tracking parameters shared by the link-producing subcommands.
#[derive(Debug, Args)]
pub struct UtmArgs {
    /// Campaign source (e.g. a landing page).
    #[arg(long, value_name = "VALUE")]
    pub utm_source: Option<String>,

    /// Campaign medium (e.g. button, qr-code).
    #[arg(long, value_name = "VALUE")]
    pub utm_medium: Option<String>,

    /// Campaign name.
    #[arg(long, value_name = "VALUE")]
    pub utm_campaign: Option<String>,

    /// Variant identifier for A/B testing.
    #[arg(long, value_name = "VALUE")]
    pub utm_content: Option<String>,

    /// Paid-search keyword.
    #[arg(long, value_name = "VALUE")]
    pub utm_term: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build a wa.me link and print it.
    Build {
        /// Phone number with country code; `+`, spaces, hyphens, and parentheses are cleaned.
        phone: String,

        /// Message to pre-fill in the chat.
        #[arg(short, long, default_value = "")]
        message: String,

        #[command(flatten)]
        utm: UtmArgs,

        /// Print the result as a JSON object instead of a bare URL.
        #[arg(long)]
        json: bool,
    },

    /// Build a link and print it as an HTML anchor snippet.
    Html {
        /// Phone number with country code; `+`, spaces, hyphens, and parentheses are cleaned.
        phone: String,

        /// Message to pre-fill in the chat.
        #[arg(short, long, default_value = "")]
        message: String,

        #[command(flatten)]
        utm: UtmArgs,

        /// Anchor text; defaults to `html_label` from config.toml.
        #[arg(long, value_name = "TEXT")]
        label: Option<String>,
    },

    /// Build and print the link for a canned example request.
    Example,
}

/// Merges CLI values with config defaults into a core request. A given flag
/// wins; a missing flag falls back to the `[utm]` table; otherwise the field
/// stays absent.
pub(crate) fn to_link_request(
    phone: &str,
    message: &str,
    utm: UtmArgs,
    cfg: &WalinkConfig,
) -> LinkRequest {
    let defaults = cfg.utm.clone().unwrap_or_default();
    let pick = |flag: Option<String>, default: Option<String>| flag.or(default).unwrap_or_default();

    LinkRequest {
        phone_raw: phone.to_string(),
        message: message.to_string(),
        utm_source: pick(utm.utm_source, defaults.source),
        utm_medium: pick(utm.utm_medium, defaults.medium),
        utm_campaign: pick(utm.utm_campaign, defaults.campaign),
        utm_content: pick(utm.utm_content, defaults.content),
        utm_term: pick(utm.utm_term, defaults.term),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Build {
                phone,
                message,
                utm,
                json,
            } => run_build(&cfg, &phone, &message, utm, json)?,
            CliCommand::Html {
                phone,
                message,
                utm,
                label,
            } => run_html(&cfg, &phone, &message, utm, label)?,
            CliCommand::Example => run_example()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
