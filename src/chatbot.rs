//! AI chatbot module - handles bot mentions and generated replies.

mod handler;
mod mention;
mod response;

pub use handler::handle_bot_mention;
pub use mention::{EMPTY_MENTION_REPLY, MentionAction, classify_mention, strip_mention};
pub use response::{MAX_MESSAGE_LENGTH, NO_CONTENT_REPLY, format_reply, generate};
