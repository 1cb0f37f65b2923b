//! Main handler for bot mentions.

use log::{debug, info};
use poise::serenity_prelude::{Context, Message as SerenityMessage, UserId};

use crate::bot::Data;
use crate::error::Result;

use super::mention::{MentionAction, classify_mention, respond_to_mention};

/// Main handler for messages that mention the bot.
pub async fn handle_bot_mention(
    ctx: &Context,
    new_message: &SerenityMessage,
    data: &Data,
    bot_user_id: UserId,
) -> Result<()> {
    let action = classify_mention(
        bot_user_id,
        new_message.author.id,
        new_message.mentions_user_id(bot_user_id),
        &new_message.content,
    );
    if action == MentionAction::Ignore {
        return Ok(());
    }

    info!(
        "Received mention from {} in channel {}: {}",
        new_message.author.tag(),
        new_message.channel_id,
        new_message.content
    );

    if matches!(action, MentionAction::Prompt(_))
        && let Err(e) = new_message.channel_id.broadcast_typing(&ctx.http).await
    {
        debug!("Failed to broadcast typing indicator: {e}");
    }

    if let Some(reply) = respond_to_mention(data.gemini_client(), action).await {
        new_message.reply(&ctx.http, &reply).await?;
        info!(
            "Replied to {} in channel {}: {}",
            new_message.author.tag(),
            new_message.channel_id,
            reply
        );
    }

    Ok(())
}
