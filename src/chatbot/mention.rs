//! Deciding what to do with a message that may mention the bot.

use poise::serenity_prelude::UserId;

use crate::gemini::TextGenerator;

use super::response::generate;

/// Reply sent when the bot is mentioned without any accompanying text.
pub const EMPTY_MENTION_REPLY: &str = "Hey! How can I help? 😊";

/// What the bot should do with an incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionAction {
    /// Not addressed to the bot, or written by the bot itself.
    Ignore,
    /// The bot was mentioned but nothing else was said.
    AskForInput,
    /// Forward the remaining text to the generator.
    Prompt(String),
}

/// Remove every mention of `bot_user_id` from `content` and trim the rest.
#[must_use]
pub fn strip_mention(content: &str, bot_user_id: UserId) -> String {
    content
        .replace(&format!("<@{bot_user_id}>"), "")
        .replace(&format!("<@!{bot_user_id}>"), "")
        .trim()
        .to_string()
}

/// Classify a message given who wrote it and whether it mentions the bot.
#[must_use]
pub fn classify_mention(
    bot_user_id: UserId,
    author_id: UserId,
    mentions_bot: bool,
    content: &str,
) -> MentionAction {
    if author_id == bot_user_id || !mentions_bot {
        return MentionAction::Ignore;
    }

    let prompt = strip_mention(content, bot_user_id);
    if prompt.is_empty() {
        MentionAction::AskForInput
    } else {
        MentionAction::Prompt(prompt)
    }
}

/// Produce the reply for a mention, or `None` when the message must be ignored.
pub async fn respond_to_mention<G: TextGenerator>(
    generator: &G,
    action: MentionAction,
) -> Option<String> {
    match action {
        MentionAction::Ignore => None,
        MentionAction::AskForInput => Some(EMPTY_MENTION_REPLY.to_string()),
        MentionAction::Prompt(prompt) => Some(generate(generator, &prompt).await),
    }
}

#[cfg(test)]
mod tests {
    use super::super::response::tests::StubGenerator;
    use super::*;

    const BOT: UserId = UserId::new(1_000);
    const USER: UserId = UserId::new(2_000);

    #[test]
    fn strips_both_mention_forms() {
        assert_eq!(strip_mention("<@1000> hello", BOT), "hello");
        assert_eq!(strip_mention("hey <@!1000>  there ", BOT), "hey   there");
        assert_eq!(strip_mention("<@2000> hi", BOT), "<@2000> hi");
    }

    #[test]
    fn plain_mention_asks_for_input() {
        assert_eq!(
            classify_mention(BOT, USER, true, "  <@1000>  "),
            MentionAction::AskForInput
        );
    }

    #[test]
    fn mention_with_text_becomes_prompt() {
        assert_eq!(
            classify_mention(BOT, USER, true, "<@1000> tell me a joke"),
            MentionAction::Prompt("tell me a joke".to_string())
        );
    }

    #[test]
    fn messages_without_mention_are_ignored() {
        assert_eq!(
            classify_mention(BOT, USER, false, "just chatting"),
            MentionAction::Ignore
        );
    }

    #[test]
    fn own_messages_are_always_ignored() {
        for content in ["<@1000>", "<@1000> hello", "", "anything at all"] {
            assert_eq!(
                classify_mention(BOT, BOT, true, content),
                MentionAction::Ignore
            );
            assert_eq!(
                classify_mention(BOT, BOT, false, content),
                MentionAction::Ignore
            );
        }
    }

    #[tokio::test]
    async fn empty_mention_does_not_call_generator() {
        let generator = StubGenerator::new(|| Ok(Some("should not be used".to_string())));
        let action = classify_mention(BOT, USER, true, "<@1000>");
        let reply = respond_to_mention(&generator, action).await;

        assert_eq!(reply.as_deref(), Some(EMPTY_MENTION_REPLY));
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn self_message_gets_no_reply() {
        let generator = StubGenerator::new(|| Ok(Some("echo".to_string())));
        let action = classify_mention(BOT, BOT, true, "<@1000> hello me");

        assert_eq!(respond_to_mention(&generator, action).await, None);
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn prompt_is_forwarded_to_generator() {
        let generator = StubGenerator::new(|| Ok(Some("42".to_string())));
        let action = classify_mention(BOT, USER, true, "<@1000> what is the answer?");
        let reply = respond_to_mention(&generator, action).await;

        assert_eq!(reply.as_deref(), Some("42"));
        assert_eq!(generator.prompts(), vec!["what is the answer?".to_string()]);
    }
}
