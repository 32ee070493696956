use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default tracking values applied when the corresponding CLI flag is absent
/// (optional `[utm]` section in config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UtmDefaults {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub campaign: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub term: Option<String>,
}

/// Global configuration loaded from `~/.config/walink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalinkConfig {
    /// Anchor text used for generated HTML snippets.
    pub html_label: String,
    /// Optional default tracking values; CLI flags always win.
    #[serde(default)]
    pub utm: Option<UtmDefaults>,
}

impl Default for WalinkConfig {
    fn default() -> Self {
        Self {
            html_label: "Chat on WhatsApp".to_string(),
            utm: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("walink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WalinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WalinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WalinkConfig = toml::from_str(&data)?;
    Ok(cfg)
}
