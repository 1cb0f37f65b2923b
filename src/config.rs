use std::env::{self, VarError};

use log::{debug, error, info};

use crate::error::{BotError, Result};

const ENV_FILE: &str = "swaebot.env";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::from_filename(ENV_FILE).ok();
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name))
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let required = |name: &'static str| {
            lookup(name).map_err(|source| {
                error!("Failed to load {name} from environment: {source}");
                BotError::EnvVar { name, source }
            })
        };
        let optional = |name: &str, default: &str| {
            lookup(name)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let discord_token = required("DISCORD_BOT_TOKEN")?;
        let google_api_key = required("GOOGLE_API_KEY")?;
        let gemini_model = optional("GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
        let gemini_api_base = optional("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE);

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", discord_token.len());
        debug!("Google API key length: {} characters", google_api_key.len());
        debug!("Gemini model: {gemini_model}");
        debug!("Gemini API base: {gemini_api_base}");

        Ok(Self {
            discord_token,
            google_api_key,
            gemini_model,
            gemini_api_base,
        })
    }
}
