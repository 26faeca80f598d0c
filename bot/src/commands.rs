/// Telegram bot command handlers.
///
/// Handles /start, /help, /tools, /terms, /settings, /status, /history,
/// /ping, plus plain-message routing (URL detection, file attachments) and
/// the inline callback flows: the consent checkbox, the terms dialog, tool
/// panels, and the simulated downloads.
///
/// Downloads and conversions never touch the network or disk. "Processing"
/// is a popup summary, and a download is a pair of timed message edits.
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use sqlx::SqlitePool;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use creatorhub_shared::config::{self, Config};
use creatorhub_shared::db;
use creatorhub_shared::files::FileInfo;
use creatorhub_shared::forms::PanelForm;
use creatorhub_shared::gate::{self, ToolSelection};
use creatorhub_shared::models::{HistoryEntry, HistoryStatus, Preferences};
use creatorhub_shared::site;
use creatorhub_shared::tools::ToolId;

use crate::callback::{self, CallbackAction};
use crate::panels;
use crate::session::{PendingDownload, SessionStore};

/// Bot command definitions.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "CreatorHub commands:")]
pub enum Command {
    #[command(description = "Welcome message and tool grid")]
    Start,
    #[command(description = "Show help")]
    Help,
    #[command(description = "Open the tool grid")]
    Tools,
    #[command(description = "Read the full terms and conditions")]
    Terms,
    #[command(description = "Per-chat preferences")]
    Settings,
    #[command(description = "Session overview")]
    Status,
    #[command(description = "Recent simulated downloads")]
    History,
    #[command(description = "Health check")]
    Ping,
}

/// Shared application state passed to handlers.
pub struct AppState {
    pub sessions: SessionStore,
    pub db_pool: Option<SqlitePool>,
    pub config: Config,
    pub started_at: Instant,
}

/// Handle incoming commands.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => cmd_start(bot, msg, state).await,
        Command::Help => cmd_help(bot, msg).await,
        Command::Tools => cmd_tools(bot, msg, state).await,
        Command::Terms => cmd_terms(bot, msg, state).await,
        Command::Settings => cmd_settings(bot, msg, state).await,
        Command::Status => cmd_status(bot, msg, state).await,
        Command::History => cmd_history(bot, msg, state).await,
        Command::Ping => cmd_ping(bot, msg, state).await,
    }
}

// ====== COMMAND IMPLEMENTATIONS ======

async fn cmd_start(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let username = msg
        .from()
        .and_then(|u| u.username.clone())
        .unwrap_or_else(|| "unknown".to_string());
    info!("/start from @{} in chat {}", username, chat_id);

    let consented = state
        .sessions
        .with(chat_id.0, |s| s.consent.is_consented())
        .await;
    let (text, keyboard) = panels::tools_grid(consented);
    bot.send_message(chat_id, text).reply_markup(keyboard).await?;
    send_footer(&bot, chat_id, &state).await
}

async fn cmd_help(bot: Bot, msg: Message) -> ResponseResult<()> {
    let text = format!(
        "🧭 {} commands\n\n\
         /start — welcome and tool grid\n\
         /tools — open the tool grid\n\
         /terms — read the full terms and conditions\n\
         /settings — per-chat preferences\n\
         /status — session overview\n\
         /history — recent simulated downloads\n\
         /ping — health check\n\n\
         Every download and conversion here is a simulated demo; \
         no real files are fetched or written.",
        config::APP_NAME
    );
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

async fn cmd_tools(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    debug!("/tools in chat {}", chat_id);
    let consented = state
        .sessions
        .with(chat_id.0, |s| s.consent.is_consented())
        .await;
    let (text, keyboard) = panels::tools_grid(consented);
    bot.send_message(chat_id, text).reply_markup(keyboard).await?;
    send_footer(&bot, chat_id, &state).await
}

/// Display only. Reading is recorded when the dialog button is pressed,
/// not when the dialog is shown.
async fn cmd_terms(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let consent = state.sessions.with(chat_id.0, |s| s.consent.clone()).await;
    let (text, keyboard) = panels::terms_dialog(&consent);
    bot.send_message(chat_id, text).reply_markup(keyboard).await?;
    Ok(())
}

async fn cmd_settings(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    if state.db_pool.is_none() {
        bot.send_message(
            chat_id,
            "⚙️ Settings are unavailable: the preferences database is offline.",
        )
        .await?;
        return Ok(());
    }
    let prefs = load_prefs(&state, chat_id.0).await;
    let (text, keyboard) = panels::settings_panel(&prefs);
    bot.send_message(chat_id, text).reply_markup(keyboard).await?;
    Ok(())
}

async fn cmd_status(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let (stage, open_panel, history_len) = state
        .sessions
        .with(chat_id.0, |s| {
            let open = s
                .modal
                .is_open()
                .then(|| s.modal.selected_title().to_string());
            (s.consent.stage(), open, s.history.len())
        })
        .await;
    let active = state.sessions.count().await;
    let database = if state.db_pool.is_some() {
        "connected"
    } else {
        "offline (/settings disabled)"
    };

    let text = format!(
        "📊 Session status\n\n\
         Consent: {}\n\
         Open panel: {}\n\
         History entries: {}\n\
         Active sessions: {}\n\
         Database: {}",
        stage,
        open_panel.unwrap_or_else(|| "none".to_string()),
        history_len,
        active,
        database
    );
    bot.send_message(chat_id, text).await?;
    Ok(())
}

async fn cmd_history(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    // Read-only: no session is created for a chat that never did anything.
    let history = state
        .sessions
        .get(chat_id.0)
        .await
        .map(|s| s.history)
        .unwrap_or_default();
    bot.send_message(chat_id, panels::history_text(&history)).await?;
    Ok(())
}

async fn cmd_ping(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let uptime = panels::format_uptime(state.started_at.elapsed().as_secs());
    let active = state.sessions.count().await;
    let text = format!(
        "🏓 Pong!\nVersion: {}\nUptime: {}\nActive sessions: {}",
        env!("CARGO_PKG_VERSION"),
        uptime,
        active
    );
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

// ====== MESSAGE HANDLER ======

/// Plain (non-command) messages: attachments feed the open file panel,
/// text feeds URL detection or the open downloader.
pub async fn handle_message(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    if let Some(batch) = extract_files(&msg) {
        return handle_attachments(bot, chat_id, batch, state).await;
    }

    let text = match msg.text() {
        Some(t) => t.trim().to_string(),
        None => return Ok(()),
    };
    if text.is_empty() {
        return Ok(());
    }

    // While the downloader panel is open it has focus: any text becomes its
    // URL, even one that would not pass detection on its own.
    let routed = state
        .sessions
        .with(chat_id.0, |s| {
            if s.modal.selected_tool() != Some(ToolId::Download) {
                return None;
            }
            let form = match s.modal.form_mut() {
                Some(form) => {
                    if let PanelForm::Download(f) = form {
                        f.set_url(&text);
                    }
                    form.clone()
                }
                None => return None,
            };
            Some((s.panel_msg_id, form))
        })
        .await;
    if let Some((panel_id, form)) = routed {
        debug!("Routed text to the open downloader in chat {}", chat_id);
        let (panel_text, keyboard) = panels::tool_panel(&form);
        if let Some(panel_id) = panel_id {
            let _ = bot
                .edit_message_text(chat_id, panel_id, panel_text)
                .reply_markup(keyboard)
                .await;
        }
        return Ok(());
    }

    if let Some(detected) = site::detect(&text) {
        debug!("Detected {} link in chat {}", detected.name, chat_id);
        state
            .sessions
            .with(chat_id.0, |s| {
                s.pending_download = Some(PendingDownload {
                    url: text.clone(),
                    platform: Some(detected.platform),
                });
            })
            .await;
        let (badge, keyboard) = panels::detection_badge(Some(detected), &text);
        bot.send_message(chat_id, badge).reply_markup(keyboard).await?;
    } else if site::looks_like_url(&text) {
        debug!("Unrecognized URL in chat {}", chat_id);
        state
            .sessions
            .with(chat_id.0, |s| {
                s.pending_download = Some(PendingDownload {
                    url: text.clone(),
                    platform: None,
                });
            })
            .await;
        let (badge, keyboard) = panels::detection_badge(None, &text);
        bot.send_message(chat_id, badge).reply_markup(keyboard).await?;
    }
    // Anything else is ignored; the bot only reacts to links and commands.

    Ok(())
}

/// Map a Telegram attachment to panel file metadata. Only the kinds the
/// tool panels accept are picked up.
fn extract_files(msg: &Message) -> Option<Vec<FileInfo>> {
    if let Some(doc) = msg.document() {
        return Some(vec![FileInfo {
            name: doc.file_name.clone().unwrap_or_else(|| "file".to_string()),
            size_bytes: doc.file.size as u64,
            mime: doc.mime_type.as_ref().map(|m| m.to_string()),
        }]);
    }
    if let Some(sizes) = msg.photo() {
        // Telegram sends several resolutions; the last one is the largest.
        let largest = sizes.last()?;
        return Some(vec![FileInfo {
            name: "photo.jpg".to_string(),
            size_bytes: largest.file.size as u64,
            mime: Some("image/jpeg".to_string()),
        }]);
    }
    if let Some(audio) = msg.audio() {
        return Some(vec![FileInfo {
            name: audio
                .file_name
                .clone()
                .unwrap_or_else(|| "audio".to_string()),
            size_bytes: audio.file.size as u64,
            mime: audio.mime_type.as_ref().map(|m| m.to_string()),
        }]);
    }
    None
}

async fn handle_attachments(
    bot: Bot,
    chat_id: ChatId,
    batch: Vec<FileInfo>,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let outcome = state
        .sessions
        .with(chat_id.0, |s| {
            let file_panel_open = matches!(
                s.modal.selected_tool(),
                Some(ToolId::Image | ToolId::Document | ToolId::Audio | ToolId::Font)
            );
            if !file_panel_open {
                return None;
            }
            let snapshot = match s.modal.form_mut() {
                Some(form) => {
                    let accepted = form.attach_files(batch).is_ok();
                    (form.clone(), accepted)
                }
                None => return None,
            };
            Some((s.panel_msg_id, snapshot.0, snapshot.1))
        })
        .await;

    match outcome {
        Some((panel_id, form, accepted)) => {
            if !accepted {
                debug!("Rejected attachment batch in chat {}", chat_id);
            }
            let (text, keyboard) = panels::tool_panel(&form);
            if let Some(panel_id) = panel_id {
                let _ = bot
                    .edit_message_text(chat_id, panel_id, text)
                    .reply_markup(keyboard)
                    .await;
            }
        }
        None => {
            bot.send_message(
                chat_id,
                "📎 Open a tool with /tools first, then send files to attach them.",
            )
            .await?;
        }
    }

    Ok(())
}

// ====== CALLBACK HANDLER ======

pub async fn handle_callback_query(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let data = match &q.data {
        Some(d) => d.clone(),
        None => {
            bot.answer_callback_query(&q.id).await?;
            return Ok(());
        }
    };
    let chat_id = match q.message.as_ref() {
        Some(m) => m.chat.id,
        None => {
            bot.answer_callback_query(&q.id).await?;
            return Ok(());
        }
    };

    let action = match callback::decode(&data) {
        Some(action) => action,
        None => {
            // Stale keyboards from older builds end up here. Answer so the
            // client stops its spinner, then drop the press.
            warn!("Unknown callback payload in chat {}: {}", chat_id, data);
            bot.answer_callback_query(&q.id).await?;
            return Ok(());
        }
    };
    debug!("Callback {:?} in chat {}", action, chat_id);

    match action {
        CallbackAction::SelectTool(raw_id) => {
            select_tool(&bot, &q, chat_id, &raw_id, &state).await?;
        }

        CallbackAction::SetConsent(value) => {
            let consent = state
                .sessions
                .with(chat_id.0, |s| {
                    s.consent.set_consented(value);
                    s.consent.clone()
                })
                .await;
            info!("Chat {} set the consent checkbox to {}", chat_id, value);
            let (text, keyboard) = panels::consent_footer(&consent);
            if let Some(m) = &q.message {
                let _ = bot
                    .edit_message_text(chat_id, m.id, text)
                    .reply_markup(keyboard)
                    .await;
                state
                    .sessions
                    .with(chat_id.0, |s| s.footer_msg_id = Some(m.id))
                    .await;
            }
            let note = if value {
                "✅ Tools unlocked."
            } else {
                "🔒 Tools locked."
            };
            bot.answer_callback_query(&q.id).text(note).await?;
        }

        CallbackAction::ReadTerms => {
            // Opening the full text counts as reading it.
            let consent = state
                .sessions
                .with(chat_id.0, |s| {
                    s.consent.mark_terms_read();
                    s.consent.clone()
                })
                .await;
            let (text, keyboard) = panels::terms_dialog(&consent);
            if let Some(m) = &q.message {
                let _ = bot
                    .edit_message_text(chat_id, m.id, text)
                    .reply_markup(keyboard)
                    .await;
            }
            bot.answer_callback_query(&q.id).await?;
        }

        CallbackAction::SetAgreement(true) => {
            let (consent, accepted) = state
                .sessions
                .with(chat_id.0, |s| {
                    s.consent.set_agreement(true);
                    (s.consent.clone(), s.consent.agreed_to_terms())
                })
                .await;
            if accepted {
                // Agreement recorded; the footer checkbox is still the gate.
                let (text, keyboard) = panels::consent_footer(&consent);
                if let Some(m) = &q.message {
                    let _ = bot
                        .edit_message_text(chat_id, m.id, text)
                        .reply_markup(keyboard)
                        .await;
                    state
                        .sessions
                        .with(chat_id.0, |s| s.footer_msg_id = Some(m.id))
                        .await;
                }
                bot.answer_callback_query(&q.id)
                    .text("Thanks — now check the box to unlock the tools.")
                    .await?;
            } else {
                bot.answer_callback_query(&q.id)
                    .text("Read the notice first, then agree.")
                    .show_alert(true)
                    .await?;
            }
        }

        CallbackAction::SetAgreement(false) => {
            let consent = state
                .sessions
                .with(chat_id.0, |s| {
                    s.consent.set_agreement(false);
                    s.consent.clone()
                })
                .await;
            let (text, keyboard) = panels::terms_dialog(&consent);
            if let Some(m) = &q.message {
                let _ = bot
                    .edit_message_text(chat_id, m.id, text)
                    .reply_markup(keyboard)
                    .await;
            }
            bot.answer_callback_query(&q.id).await?;
        }

        CallbackAction::DeclineTerms => {
            let consent = state
                .sessions
                .with(chat_id.0, |s| {
                    s.consent.reset();
                    s.consent.clone()
                })
                .await;
            info!("Chat {} declined the terms", chat_id);
            let (text, keyboard) = panels::consent_footer(&consent);
            if let Some(m) = &q.message {
                let _ = bot
                    .edit_message_text(chat_id, m.id, text)
                    .reply_markup(keyboard)
                    .await;
                state
                    .sessions
                    .with(chat_id.0, |s| s.footer_msg_id = Some(m.id))
                    .await;
            }
            bot.answer_callback_query(&q.id).text("Terms declined.").await?;
        }

        CallbackAction::Field(field) => {
            let form = state
                .sessions
                .with(chat_id.0, |s| {
                    s.modal.form_mut().map(|form| {
                        form.apply(field);
                        form.clone()
                    })
                })
                .await;
            match form {
                Some(form) => {
                    edit_panel(&bot, &q, chat_id, &form).await;
                    bot.answer_callback_query(&q.id).await?;
                }
                None => {
                    bot.answer_callback_query(&q.id)
                        .text("That panel is no longer open.")
                        .await?;
                }
            }
        }

        CallbackAction::ProcessFiles => {
            // The files stay attached afterwards so the popup can be re-run
            // with different options.
            let summary = state
                .sessions
                .with(chat_id.0, |s| {
                    s.modal.form().and_then(|f| f.process_summary())
                })
                .await;
            match summary {
                Some(summary) => {
                    info!("Chat {} ran a simulated process: {}", chat_id, summary);
                    bot.answer_callback_query(&q.id)
                        .text(summary)
                        .show_alert(true)
                        .await?;
                }
                None => {
                    bot.answer_callback_query(&q.id)
                        .text("📎 Attach files first.")
                        .await?;
                }
            }
        }

        CallbackAction::ClearFiles => {
            let form = state
                .sessions
                .with(chat_id.0, |s| {
                    s.modal.form_mut().map(|form| {
                        form.clear_files();
                        form.clone()
                    })
                })
                .await;
            match form {
                Some(form) => {
                    edit_panel(&bot, &q, chat_id, &form).await;
                    bot.answer_callback_query(&q.id).text("🗑 Files cleared.").await?;
                }
                None => {
                    bot.answer_callback_query(&q.id)
                        .text("That panel is no longer open.")
                        .await?;
                }
            }
        }

        CallbackAction::ClosePanel => {
            let consented = state
                .sessions
                .with(chat_id.0, |s| {
                    s.modal.close();
                    s.panel_msg_id = None;
                    s.consent.is_consented()
                })
                .await;
            let (text, keyboard) = panels::tools_grid(consented);
            if let Some(m) = &q.message {
                let _ = bot
                    .edit_message_text(chat_id, m.id, text)
                    .reply_markup(keyboard)
                    .await;
            }
            bot.answer_callback_query(&q.id).await?;
        }

        CallbackAction::QuickDownload => {
            quick_download(&bot, &q, chat_id, &state).await?;
        }

        CallbackAction::DownloadFormat(idx) => {
            let form = state
                .sessions
                .with(chat_id.0, |s| {
                    s.modal.form_mut().map(|form| {
                        if let PanelForm::Download(f) = form {
                            f.select_format(idx);
                        }
                        form.clone()
                    })
                })
                .await;
            match form {
                Some(form) => {
                    edit_panel(&bot, &q, chat_id, &form).await;
                    bot.answer_callback_query(&q.id).await?;
                }
                None => {
                    bot.answer_callback_query(&q.id)
                        .text("That panel is no longer open.")
                        .await?;
                }
            }
        }

        CallbackAction::StartDownload => {
            start_download(&bot, &q, chat_id, &state).await?;
        }

        CallbackAction::CycleTheme
        | CallbackAction::CycleLanguage
        | CallbackAction::ToggleAutoSave
        | CallbackAction::ToggleNotifications => {
            update_settings(&bot, &q, chat_id, &state, action).await?;
        }
    }

    Ok(())
}

// ====== CALLBACK FLOWS ======

/// Tool card tap: consent gate first, then open the panel in place.
async fn select_tool(
    bot: &Bot,
    q: &CallbackQuery,
    chat_id: ChatId,
    raw_id: &str,
    state: &Arc<AppState>,
) -> ResponseResult<()> {
    let consent = state.sessions.with(chat_id.0, |s| s.consent.clone()).await;
    match gate::select_tool(&consent, raw_id) {
        ToolSelection::ConsentRequired => {
            bot.answer_callback_query(&q.id)
                .text("🔒 Agree to the terms first — check the box below the tool grid.")
                .await?;
            send_footer(bot, chat_id, state).await?;
        }

        ToolSelection::Open(info) => {
            info!("Chat {} opened the {} panel", chat_id, info.title);
            let form = state
                .sessions
                .with(chat_id.0, |s| {
                    s.modal.open(info.id, info.title);
                    // A link pasted before opening the downloader pre-fills it.
                    if info.id == ToolId::Download {
                        if let Some(pending) = s.pending_download.clone() {
                            if let Some(PanelForm::Download(f)) = s.modal.form_mut() {
                                f.set_url(&pending.url);
                            }
                        }
                    }
                    s.modal.form().cloned()
                })
                .await;
            if let Some(form) = form {
                let (text, keyboard) = panels::tool_panel(&form);
                if let Some(m) = &q.message {
                    let _ = bot
                        .edit_message_text(chat_id, m.id, text)
                        .reply_markup(keyboard)
                        .await;
                    state
                        .sessions
                        .with(chat_id.0, |s| s.panel_msg_id = Some(m.id))
                        .await;
                }
            }
            bot.answer_callback_query(&q.id).await?;
        }

        ToolSelection::UnknownTool => {
            warn!("Unknown tool id in callback for chat {}: {}", chat_id, raw_id);
            let (text, keyboard) = panels::fallback_panel();
            if let Some(m) = &q.message {
                let _ = bot
                    .edit_message_text(chat_id, m.id, text)
                    .reply_markup(keyboard)
                    .await;
            }
            bot.answer_callback_query(&q.id).await?;
        }
    }
    Ok(())
}

/// Quick download from a detection badge: a 2 second spinner, then the
/// plain confirmation line. No history entry and no panel involved.
async fn quick_download(
    bot: &Bot,
    q: &CallbackQuery,
    chat_id: ChatId,
    state: &Arc<AppState>,
) -> ResponseResult<()> {
    let (consented, pending) = state
        .sessions
        .with(chat_id.0, |s| {
            (s.consent.is_consented(), s.pending_download.clone())
        })
        .await;
    if !consented {
        bot.answer_callback_query(&q.id)
            .text("🔒 Agree to the terms first — check the box below the tool grid.")
            .await?;
        send_footer(bot, chat_id, state).await?;
        return Ok(());
    }
    let pending = match pending {
        Some(p) => p,
        None => {
            bot.answer_callback_query(&q.id).text("Paste a link first.").await?;
            return Ok(());
        }
    };
    bot.answer_callback_query(&q.id).await?;

    let msg_id = match q.message.as_ref() {
        Some(m) => m.id,
        None => return Ok(()),
    };
    let site_name = pending.platform.map(|p| site::site_info(p).name);
    info!(
        "Chat {} started a quick download ({})",
        chat_id,
        site_name.unwrap_or("website")
    );

    // Editing without a keyboard drops the badge buttons.
    let _ = bot
        .edit_message_text(chat_id, msg_id, panels::DOWNLOAD_SPINNER)
        .await;
    let bot = bot.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(2)).await;
        let _ = bot
            .edit_message_text(chat_id, msg_id, panels::download_started_text(site_name))
            .await;
    });
    Ok(())
}

/// Panel download: history entry, three timed progress edits, then a
/// completion message and a reset panel.
async fn start_download(
    bot: &Bot,
    q: &CallbackQuery,
    chat_id: ChatId,
    state: &Arc<AppState>,
) -> ResponseResult<()> {
    let snapshot = state
        .sessions
        .with(chat_id.0, |s| {
            if let Some(PanelForm::Download(f)) = s.modal.form() {
                match (&f.url, f.platform, f.selected_format()) {
                    (Some(url), Some(platform), Some(format)) => {
                        Some((url.clone(), platform, format))
                    }
                    _ => None,
                }
            } else {
                None
            }
        })
        .await;
    let (url, platform, format) = match snapshot {
        Some(parts) => parts,
        None => {
            bot.answer_callback_query(&q.id)
                .text("Paste a link and pick a format first.")
                .await?;
            return Ok(());
        }
    };

    let detected = site::site_info(platform);
    let task_id = Uuid::new_v4().to_string();
    let short_id = task_id.chars().take(8).collect::<String>();
    info!(
        "Chat {} queued download task {}: {} ({})",
        chat_id, short_id, detected.name, format
    );

    state
        .sessions
        .with(chat_id.0, |s| {
            s.push_history(HistoryEntry {
                url: url.clone(),
                site_name: detected.name.to_string(),
                format: format.to_string(),
                status: HistoryStatus::Processing,
                timestamp: Utc::now(),
            });
        })
        .await;

    bot.answer_callback_query(&q.id).await?;
    let msg_id = match q.message.as_ref() {
        Some(m) => m.id,
        None => return Ok(()),
    };

    let prefs = load_prefs(state, chat_id.0).await;
    let bot = bot.clone();
    let state = state.clone();
    tokio::spawn(async move {
        for percent in [33u8, 66, 100] {
            let _ = bot
                .edit_message_text(
                    chat_id,
                    msg_id,
                    panels::download_progress_text(&short_id, &url, percent),
                )
                .await;
            tokio::time::sleep(Duration::from_secs(1)).await;
        }

        // Complete the history entry and reset the panel for the next link.
        let form = state
            .sessions
            .with(chat_id.0, |s| {
                if let Some(entry) = s
                    .history
                    .iter_mut()
                    .find(|e| e.url == url && e.status == HistoryStatus::Processing)
                {
                    entry.status = HistoryStatus::Completed;
                }
                if let Some(PanelForm::Download(f)) = s.modal.form_mut() {
                    f.clear();
                }
                s.modal.form().cloned()
            })
            .await;
        if let Some(form) = form {
            let (text, keyboard) = panels::tool_panel(&form);
            let _ = bot
                .edit_message_text(chat_id, msg_id, text)
                .reply_markup(keyboard)
                .await;
        }

        let done = panels::download_complete_text(&short_id, detected.name, format);
        let send = bot.send_message(chat_id, done);
        let send = if prefs.notifications {
            send
        } else {
            send.disable_notification(true)
        };
        if let Err(e) = send.await {
            error!("Failed to send completion message to chat {}: {}", chat_id, e);
        }
    });
    Ok(())
}

async fn update_settings(
    bot: &Bot,
    q: &CallbackQuery,
    chat_id: ChatId,
    state: &Arc<AppState>,
    action: CallbackAction,
) -> ResponseResult<()> {
    // Stale settings keyboards can outlive the pool across a restart.
    if state.db_pool.is_none() {
        bot.answer_callback_query(&q.id)
            .text("Settings are unavailable: the database is offline.")
            .await?;
        return Ok(());
    }
    let mut prefs = load_prefs(state, chat_id.0).await;
    match action {
        CallbackAction::CycleTheme => {
            prefs.theme = prefs.theme().next().as_str().to_string();
        }
        CallbackAction::CycleLanguage => prefs.cycle_language(),
        CallbackAction::ToggleAutoSave => prefs.auto_save = !prefs.auto_save,
        CallbackAction::ToggleNotifications => prefs.notifications = !prefs.notifications,
        _ => {}
    }
    prefs.updated_at = Utc::now().naive_utc();
    store_prefs(state, &prefs).await;

    let (text, keyboard) = panels::settings_panel(&prefs);
    if let Some(m) = &q.message {
        let _ = bot
            .edit_message_text(chat_id, m.id, text)
            .reply_markup(keyboard)
            .await;
    }
    bot.answer_callback_query(&q.id).await?;
    Ok(())
}

// ====== SHARED HELPERS ======

/// Re-render the open panel in place of the tapped message.
async fn edit_panel(bot: &Bot, q: &CallbackQuery, chat_id: ChatId, form: &PanelForm) {
    let (text, keyboard) = panels::tool_panel(form);
    if let Some(m) = &q.message {
        let _ = bot
            .edit_message_text(chat_id, m.id, text)
            .reply_markup(keyboard)
            .await;
    }
}

/// Send a fresh consent footer, dropping the previous one so only one live
/// checkbox exists per chat.
async fn send_footer(bot: &Bot, chat_id: ChatId, state: &Arc<AppState>) -> ResponseResult<()> {
    let stale = state
        .sessions
        .with(chat_id.0, |s| s.footer_msg_id.take())
        .await;
    if let Some(old) = stale {
        let _ = bot.delete_message(chat_id, old).await;
    }

    let consent = state.sessions.with(chat_id.0, |s| s.consent.clone()).await;
    let (text, keyboard) = panels::consent_footer(&consent);
    let sent = bot.send_message(chat_id, text).reply_markup(keyboard).await?;
    state
        .sessions
        .with(chat_id.0, |s| s.footer_msg_id = Some(sent.id))
        .await;
    Ok(())
}

/// Preferences: session cache first, then the database, then defaults.
async fn load_prefs(state: &Arc<AppState>, chat_id: i64) -> Preferences {
    if let Some(cached) = state.sessions.with(chat_id, |s| s.prefs.clone()).await {
        return cached;
    }
    let prefs = match &state.db_pool {
        Some(pool) => match db::get_preferences(pool, chat_id).await {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("Failed to load preferences for chat {}: {}", chat_id, e);
                Preferences::default_for(chat_id)
            }
        },
        None => Preferences::default_for(chat_id),
    };
    state
        .sessions
        .with(chat_id, |s| s.prefs = Some(prefs.clone()))
        .await;
    prefs
}

/// Cache updated preferences on the session and persist them. Settings
/// flows are disabled without the pool, so the `None` arm is never the
/// result of a user change.
async fn store_prefs(state: &Arc<AppState>, prefs: &Preferences) {
    state
        .sessions
        .with(prefs.chat_id, |s| s.prefs = Some(prefs.clone()))
        .await;
    if let Some(pool) = &state.db_pool {
        if let Err(e) = db::upsert_preferences(pool, prefs).await {
            error!(
                "Failed to persist preferences for chat {}: {}",
                prefs.chat_id, e
            );
        }
    }
}
