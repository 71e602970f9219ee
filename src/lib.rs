//! TRUTH-BOT: relays Telegram messages to a text-generation provider, with an
//! offline keyword responder as the last resort.

pub mod commands;
pub mod config;
pub mod fallback;
pub mod prompt;
pub mod provider;
pub mod router;
pub mod telegram;
