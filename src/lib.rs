pub mod bot;
pub mod chatbot;
pub mod commands;
pub mod config;
pub mod error;
pub mod gemini;

pub use bot::run;
