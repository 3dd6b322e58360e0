// Bot configuration, loaded from the process environment (and `.env` via dotenv).

use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_MOJANG_API_URL: &str = "https://api.mojang.com";
pub const DEFAULT_HYPIXEL_API_URL: &str = "https://api.hypixel.net";
pub const DEFAULT_BACKGROUND_PATH: &str = "embed.jpg";
pub const DEFAULT_FONT_PATH: &str = "fonts/Minecraft.ttf";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// Discord bot token.
    pub discord_token: String,
    /// Hypixel API key, sent with every stats request.
    pub hypixel_api_key: String,
    /// Base URL of the Mojang profile API.
    pub mojang_api_url: String,
    /// Base URL of the Hypixel public API.
    pub hypixel_api_url: String,
    /// Background template the stats card is drawn onto.
    pub background_path: PathBuf,
    /// Decorative font; a bitmap font is used when this file is absent.
    pub font_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DISCORD_TOKEN` - bot token (required)
    /// - `HYPIXEL_API_KEY` - Hypixel API key (required)
    /// - `MOJANG_API_URL` - identity API base (default: `https://api.mojang.com`)
    /// - `HYPIXEL_API_URL` - stats API base (default: `https://api.hypixel.net`)
    /// - `BACKGROUND_PATH` - card background (default: `embed.jpg`)
    /// - `FONT_PATH` - card font (default: `fonts/Minecraft.ttf`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Config {
            discord_token: require("DISCORD_TOKEN")?,
            hypixel_api_key: require("HYPIXEL_API_KEY")?,
            mojang_api_url: get("MOJANG_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_MOJANG_API_URL.to_string()),
            hypixel_api_url: get("HYPIXEL_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_HYPIXEL_API_URL.to_string()),
            background_path: get("BACKGROUND_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BACKGROUND_PATH)),
            font_path: get("FONT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_PATH)),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"<redacted>")
            .field("hypixel_api_key", &"<redacted>")
            .field("mojang_api_url", &self.mojang_api_url)
            .field("hypixel_api_url", &self.hypixel_api_url)
            .field("background_path", &self.background_path)
            .field("font_path", &self.font_path)
            .finish()
    }
}
