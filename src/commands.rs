//! Slash commands: a canned greeting and a one-shot AI chat.

use log::info;
use rand::prelude::IndexedRandom;

use crate::{
    bot::Data,
    chatbot::generate,
    error::{BotError, Result},
};

/// Context type for bot commands.
type Context<'a> = poise::Context<'a, Data, BotError>;

pub const GREETINGS: [&str; 4] = [
    "Yo! I'm SwaeBot, your AI overlord! Bow before me! 😎",
    "Beep boop! I'm here to entertain and chat. What’s up? 🚀",
    "Error 404: Chill Mode Not Found. Let's chat! 😂",
    "Greetings, human! I bring memes and wisdom. 🔥",
];

/// Pick one greeting uniformly at random.
#[must_use]
pub fn pick_greeting<R: rand::Rng + ?Sized>(rng: &mut R) -> &'static str {
    GREETINGS.choose(rng).copied().unwrap_or(GREETINGS[0])
}

/// Get a funny greeting from SwaeBot!
#[poise::command(slash_command)]
pub async fn swaebot(ctx: Context<'_>) -> Result<()> {
    let greeting = pick_greeting(&mut rand::rng());
    ctx.say(greeting).await?;
    info!("Sent greeting to {}", ctx.author().tag());
    Ok(())
}

/// Talk to SwaeBot using AI!
#[poise::command(slash_command)]
pub async fn chat(
    ctx: Context<'_>,
    #[description = "What do you want to say to SwaeBot?"] message: String,
) -> Result<()> {
    // Generation can outlive Discord's three second interaction window.
    ctx.defer().await?;

    info!(
        "Received /chat from {} in channel {}: {}",
        ctx.author().tag(),
        ctx.channel_id(),
        message
    );

    let reply = generate(ctx.data().gemini_client(), &message).await;
    ctx.say(&reply).await?;

    info!("Replied to /chat from {}: {}", ctx.author().tag(), reply);
    Ok(())
}

/// Get all slash commands.
#[must_use]
pub fn bot_commands() -> Vec<poise::Command<Data, BotError>> {
    vec![swaebot(), chat()]
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn greeting_is_always_from_fixed_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(GREETINGS.contains(&pick_greeting(&mut rng)));
        }
    }

    #[test]
    fn greetings_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..1000 {
            *counts.entry(pick_greeting(&mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), GREETINGS.len());
        for (greeting, count) in counts {
            assert!(
                (150..=350).contains(&count),
                "{greeting} picked {count} times out of 1000"
            );
        }
    }

    #[test]
    fn registers_both_commands() {
        let names: Vec<String> = bot_commands().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["swaebot".to_string(), "chat".to_string()]);
    }

    #[test]
    fn chat_takes_required_message_argument() -> std::result::Result<(), &'static str> {
        let command = chat();
        let parameter = command
            .parameters
            .first()
            .ok_or("chat should take a parameter")?;
        assert_eq!(parameter.name, "message");
        assert!(parameter.required);
        Ok(())
    }
}
