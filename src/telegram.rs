//! Telegram front-end: command endpoints and the text relay.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{ChatAction, ParseMode};
use tracing::{info, warn};

use crate::commands::{self, Command};
use crate::config::Config;
use crate::router::ResponseRouter;

/// Telegram rejects messages longer than this.
pub const MAX_MESSAGE_CHARS: usize = 4096;

pub struct BotState {
    pub config: Config,
    pub router: ResponseRouter,
}

/// Dispatch tree: known commands first, every other message goes to the relay.
pub fn schema() -> teloxide::dispatching::UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::endpoint(handle_text))
}

pub async fn run(bot: Bot, state: Arc<BotState>) {
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn handle_command(bot: Bot, msg: Message, cmd: Command, state: Arc<BotState>) -> ResponseResult<()> {
    info!("Command {:?} in chat {}", cmd, msg.chat.id);

    let text = match cmd {
        Command::Start => {
            let first_name = msg.from.as_ref().map(|u| u.first_name.as_str()).unwrap_or("there");
            commands::start_text(first_name, state.config.has_ai())
        }
        Command::Help => commands::help_text(),
        Command::Status => commands::status_text(state.router.active_label().as_deref()),
        Command::Setup => commands::setup_text().to_string(),
    };

    if let Err(e) = bot.send_message(msg.chat.id, text).parse_mode(ParseMode::Html).await {
        warn!("Failed to send {:?} reply: {e}", cmd);
    }
    Ok(())
}

async fn handle_text(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let Some(text) = msg.text().and_then(relay_text) else {
        return Ok(());
    };

    let text_preview: String = text.chars().take(100).collect();
    info!("📨 Message in chat {}: \"{text_preview}\"", msg.chat.id);

    if let Err(e) = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await {
        warn!("Failed to send typing action: {e}");
    }

    let reply = state.router.resolve(text).await;
    let reply = truncate_reply(&reply);

    if let Err(e) = bot.send_message(msg.chat.id, reply).await {
        warn!("Failed to send reply: {e}");
    }
    Ok(())
}

/// Text worth relaying: trimmed, non-empty, and not a command.
/// Unknown commands fall through the command branch and end up here.
pub fn relay_text(raw: &str) -> Option<&str> {
    let text = raw.trim();
    if text.is_empty() || text.starts_with('/') {
        None
    } else {
        Some(text)
    }
}

/// Cut a reply to Telegram's message limit on a char boundary.
/// The limit counts UTF-16 code units.
pub fn truncate_reply(text: &str) -> String {
    if text.encode_utf16().count() <= MAX_MESSAGE_CHARS {
        return text.to_string();
    }
    let budget = MAX_MESSAGE_CHARS - 3;
    let mut used = 0;
    let truncated: String = text
        .chars()
        .take_while(|c| {
            used += c.len_utf16();
            used <= budget
        })
        .collect();
    format!("{}...", truncated)
}
