use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Serenity error: {0}")]
    Serenity(Box<poise::serenity_prelude::Error>),

    #[error("Environment variable {name} error: {source}")]
    EnvVar {
        name: &'static str,
        source: std::env::VarError,
    },

    #[error("Gemini API error ({status}): {message}")]
    GeminiApi { status: StatusCode, message: String },

    #[error("Gemini blocked the prompt: {0}")]
    GeminiBlocked(String),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl From<poise::serenity_prelude::Error> for BotError {
    fn from(err: poise::serenity_prelude::Error) -> Self {
        BotError::Serenity(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
