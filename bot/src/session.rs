/// Per-chat session state.
///
/// One `Session` per chat holds the consent flags, the open tool panel, the
/// last pasted URL, and the simulated download history. Sessions live in
/// memory only and are swept after a TTL of inactivity, so consent and open
/// panels reset the way a page reload resets them.
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use teloxide::types::MessageId;
use tokio::sync::Mutex;
use tracing::debug;

use creatorhub_shared::consent::ConsentState;
use creatorhub_shared::modal::ToolModal;
use creatorhub_shared::models::{HistoryEntry, Preferences};
use creatorhub_shared::site::Platform;

/// History entries kept per session; /history shows the newest five.
pub const HISTORY_CAP: usize = 10;

/// A URL pasted in chat, waiting for the quick-download button.
#[derive(Debug, Clone)]
pub struct PendingDownload {
    pub url: String,
    /// `None` for a generic URL that matched no platform pattern.
    pub platform: Option<Platform>,
}

/// Everything the bot remembers about one chat.
#[derive(Debug, Clone)]
pub struct Session {
    pub consent: ConsentState,
    pub modal: ToolModal,
    pub pending_download: Option<PendingDownload>,
    /// Newest first.
    pub history: Vec<HistoryEntry>,
    /// Cached preferences row; `None` until /settings touches the database.
    pub prefs: Option<Preferences>,
    /// Last consent footer sent to this chat, edited in place on toggles.
    pub footer_msg_id: Option<MessageId>,
    /// Message carrying the open panel keyboard, edited in place on changes.
    pub panel_msg_id: Option<MessageId>,
    pub last_seen: Instant,
}

impl Session {
    fn new() -> Self {
        Self {
            consent: ConsentState::new(),
            modal: ToolModal::default(),
            pending_download: None,
            history: Vec::new(),
            prefs: None,
            footer_msg_id: None,
            panel_msg_id: None,
            last_seen: Instant::now(),
        }
    }

    /// Prepend a history entry, dropping the oldest past the cap.
    pub fn push_history(&mut self, entry: HistoryEntry) {
        self.history.insert(0, entry);
        self.history.truncate(HISTORY_CAP);
    }
}

/// Thread-safe store of chat sessions.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<i64, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Run a closure against the chat's session, creating it on first
    /// contact. Touches `last_seen`.
    pub async fn with<T>(&self, chat_id: i64, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut map = self.inner.lock().await;
        let session = map.entry(chat_id).or_insert_with(Session::new);
        session.last_seen = Instant::now();
        f(session)
    }

    /// Snapshot of a session, if the chat has one. Does not touch
    /// `last_seen`.
    pub async fn get(&self, chat_id: i64) -> Option<Session> {
        self.inner.lock().await.get(&chat_id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Remove sessions idle longer than the TTL.
    pub async fn cleanup_expired(&self, ttl_secs: u64) {
        let now = Instant::now();
        let mut map = self.inner.lock().await;
        let before = map.len();
        map.retain(|_, s| now.duration_since(s.last_seen).as_secs() < ttl_secs);
        let removed = before - map.len();
        if removed > 0 {
            debug!("Swept {} idle session(s)", removed);
        }
    }
}
