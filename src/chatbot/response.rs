//! Turning generation results into Discord-sized replies.

use log::{debug, error};

use crate::gemini::TextGenerator;

/// Discord's message character limit for standard users.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Characters reserved at the end of a truncated reply.
const TRUNCATION_MARGIN: usize = 10;

const ELLIPSIS: &str = "...";

/// Reply used when the provider succeeds without producing any text.
pub const NO_CONTENT_REPLY: &str = "Oops! No response from AI. 😢";

const ERROR_PREFIX: &str = "⚠️ AI Error: ";

/// Truncate `text` so that it fits in a single Discord message.
///
/// Lengths are counted in characters, not bytes.
#[must_use]
pub fn format_reply(text: &str) -> String {
    if text.chars().count() <= MAX_MESSAGE_LENGTH {
        return text.to_string();
    }

    let mut truncated: String = text
        .chars()
        .take(MAX_MESSAGE_LENGTH - TRUNCATION_MARGIN)
        .collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Ask `generator` to complete `prompt` and return the text to send back.
///
/// Never fails: provider errors become a visible error message.
pub async fn generate<G: TextGenerator>(generator: &G, prompt: &str) -> String {
    let reply = match generator.generate_content(prompt).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!("Generation returned no text");
            NO_CONTENT_REPLY.to_string()
        }
        Err(e) => {
            error!("Generation failed: {e}");
            format!("{ERROR_PREFIX}{e}")
        }
    };

    format_reply(&reply)
}
