//! Discord bot core logic and event handling.

use log::{debug, error, info};
use poise::{
    Framework, FrameworkOptions, builtins,
    serenity_prelude::{ClientBuilder, Context, FullEvent, GatewayIntents},
};

use crate::chatbot::handle_bot_mention;
use crate::commands::bot_commands;
use crate::config::Config;
use crate::error::{BotError, Result};
use crate::gemini::GeminiClient;

/// Services shared by every command and event handler.
pub struct Data {
    gemini_client: GeminiClient,
}

impl Data {
    #[must_use]
    pub fn new(gemini_client: GeminiClient) -> Self {
        Self { gemini_client }
    }

    #[must_use]
    pub fn gemini_client(&self) -> &GeminiClient {
        &self.gemini_client
    }
}

/// Run the Discord bot.
///
/// # Errors
///
/// Returns an error if configuration is missing or the Discord client fails.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    debug!("Initializing Gemini client");
    let gemini_client = GeminiClient::new(
        config.google_api_key,
        &config.gemini_api_base,
        &config.gemini_model,
    );

    debug!("Setting up gateway intents");
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: bot_commands(),
            event_handler: |ctx, event, _framework, data| Box::pin(event_handler(ctx, event, data)),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                debug!("Registering commands globally");
                builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Commands registered successfully");
                info!("🤖 {} is online!", ready.user.name);
                Ok(Data::new(gemini_client))
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

async fn event_handler(ctx: &Context, event: &FullEvent, data: &Data) -> Result<()> {
    if let FullEvent::Message { new_message } = event {
        let bot_user_id = ctx.cache.current_user().id;
        handle_bot_mention(ctx, new_message, data, bot_user_id).await?;
    }
    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Data, BotError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Command /{} failed: {}", ctx.command().name, error);
        }
        other => {
            if let Err(e) = builtins::on_error(other).await {
                error!("Error while handling framework error: {e}");
            }
        }
    }
}
