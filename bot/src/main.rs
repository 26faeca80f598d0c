/// CreatorHub Bot - Main Entry Point
///
/// Telegram bot built with teloxide that puts a simulated creator tool
/// suite behind a consent gate: URL detection, tool panels, and demo
/// downloads that never touch the network or disk.
mod callback;
mod commands;
mod panels;
mod session;

use std::sync::Arc;
use std::time::Instant;

use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tracing::{error, info, warn};

use creatorhub_shared::config::Config;
use commands::{AppState, Command};
use session::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("creatorhub_bot=info".parse()?)
                .add_directive("creatorhub_shared=info".parse()?),
        )
        .init();

    info!("=== CreatorHub Bot Starting ===");

    // Read configuration from environment
    let bot_token = std::env::var("TELOXIDE_TOKEN")
        .expect("TELOXIDE_TOKEN must be set");
    let config = Config::from_env();
    if let Some(base) = &config.api_base_url {
        info!("API base URL configured (unused in demo mode): {}", base);
    }

    // Connect to the preferences database; the bot degrades to
    // session-only preferences when it is unavailable.
    let database_url = format!("sqlite://{}?mode=rwc", config.database_path);
    info!("Database path: {}", config.database_path);
    let db_pool = match creatorhub_shared::db::create_pool(&database_url).await {
        Ok(pool) => {
            if let Err(e) = creatorhub_shared::db::run_migrations(&pool).await {
                error!("DB migration error: {}", e);
            }
            info!("Connected to the preferences database");
            Some(pool)
        }
        Err(e) => {
            error!("Failed to connect to database (/settings disabled): {}", e);
            None
        }
    };

    // Initialize the per-chat session store
    let sessions = SessionStore::new();
    let session_ttl_secs = config.session_ttl_secs;

    // Create shared application state
    let state = Arc::new(AppState {
        sessions: sessions.clone(),
        db_pool: db_pool.clone(),
        config,
        started_at: Instant::now(),
    });

    // Build and start the Telegram bot
    let bot = Bot::new(bot_token);

    // Explicitly delete any existing webhook before polling
    // (prevents 409 Conflict if a webhook was previously set)
    match bot.delete_webhook().send().await {
        Ok(_) => info!("Webhook cleared (ready for polling)"),
        Err(e) => warn!("Failed to delete webhook: {} (continuing anyway)", e),
    }

    // Sync commands with Telegram (enables autocomplete menu)
    use teloxide::utils::command::BotCommands;
    match bot.set_my_commands(Command::bot_commands()).await {
        Ok(_) => info!("Bot commands synced with Telegram"),
        Err(e) => error!("Failed to sync bot commands: {}", e),
    }

    // Notify admin that bot is online
    let admin_chat_id = std::env::var("ADMIN_CHAT_ID").ok()
        .and_then(|s| s.parse::<i64>().ok());
    if let Some(admin_id) = admin_chat_id {
        let db_status = if db_pool.is_some() { "connected" } else { "offline" };
        let msg = format!(
            "CreatorHub Bot online\nDB: {}\nSession TTL: {}s",
            db_status, session_ttl_secs
        );
        match bot.send_message(ChatId(admin_id), msg).await {
            Ok(_) => info!("Admin startup notification sent"),
            Err(e) => warn!("Failed to send admin notification: {}", e),
        }
    }

    info!("Bot initialized, starting dispatcher...");

    // Set up command handler, message handler, and callback query handler
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint({
                    let state = state.clone();
                    move |bot: Bot, msg: Message, cmd: Command| {
                        let state = state.clone();
                        async move { commands::handle_command(bot, msg, cmd, state).await }
                    }
                }),
        )
        .branch(
            Update::filter_message()
                .endpoint({
                    let state = state.clone();
                    move |bot: Bot, msg: Message| {
                        let state = state.clone();
                        async move { commands::handle_message(bot, msg, state).await }
                    }
                }),
        )
        .branch(
            Update::filter_callback_query()
                .endpoint({
                    let state = state.clone();
                    move |bot: Bot, q: CallbackQuery| {
                        let state = state.clone();
                        async move { commands::handle_callback_query(bot, q, state).await }
                    }
                }),
        );

    // Spawn background cleanup task for idle sessions
    let cleanup_sessions = sessions.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            cleanup_sessions.cleanup_expired(session_ttl_secs).await;
        }
    });

    // Run the bot
    Dispatcher::builder(bot, handler)
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.kind);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("CreatorHub Bot stopped.");
    Ok(())
}
