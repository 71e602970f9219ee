use std::sync::Arc;

use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::prelude::*;

use truthbot::config::Config;
use truthbot::router::ResponseRouter;
use truthbot::telegram::{self, BotState};

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", "=".repeat(60));
            eprintln!("❌ ERROR: {e}");
            eprintln!("Set BOT_TOKEN in the environment (or a .env file) and restart.");
            eprintln!("{}", "=".repeat(60));
            std::process::exit(1);
        }
    };

    // Setup logging
    std::fs::create_dir_all(&config.log_dir).ok();
    let file_appender = tracing_appender::rolling::never(&config.log_dir, "truthbot.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                ),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                ),
        )
        .init();

    let router = ResponseRouter::from_config(&config);

    info!("🤖 Starting TRUTH-BOT v2.0");
    match router.active_provider() {
        Some(name) => info!("Primary provider: {name}"),
        None => info!("No provider keys set, using keyword fallback only"),
    }
    info!("Provider timeout: {:?}", config.provider_timeout);

    let bot = Bot::new(&config.telegram_bot_token);
    let state = Arc::new(BotState { config, router });

    telegram::run(bot, state).await;
}
