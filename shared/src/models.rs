/// Preference and history models shared across the CreatorHub crates.
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    System,
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value; unknown strings fall back to the default.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Next theme in the settings cycle.
    pub fn next(&self) -> Self {
        match self {
            Theme::System => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Languages offered by the settings panel, in cycle order.
pub const LANGUAGES: [&str; 4] = ["en", "de", "es", "fr"];

/// Per-chat preferences, persisted in SQLite.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Preferences {
    pub chat_id: i64,
    pub theme: String,
    pub language: String,
    pub auto_save: bool,
    /// When off, simulated downloads are sent without a notification ping.
    pub notifications: bool,
    pub updated_at: NaiveDateTime,
}

impl Preferences {
    /// Defaults used when a chat has no stored row yet.
    pub fn default_for(chat_id: i64) -> Self {
        Self {
            chat_id,
            theme: Theme::System.as_str().to_string(),
            language: "en".to_string(),
            auto_save: true,
            notifications: true,
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::parse(&self.theme)
    }

    /// Advance to the next language; unknown stored values snap back to the
    /// first entry.
    pub fn cycle_language(&mut self) {
        let next = match LANGUAGES.iter().position(|l| *l == self.language) {
            Some(idx) => (idx + 1) % LANGUAGES.len(),
            None => 0,
        };
        self.language = LANGUAGES[next].to_string();
    }
}

/// Status of one simulated download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStatus {
    Processing,
    Completed,
    Failed,
}

impl HistoryStatus {
    /// Status glyph used in history listings.
    pub fn icon(&self) -> &'static str {
        match self {
            HistoryStatus::Completed => "✅",
            HistoryStatus::Processing => "🕐",
            HistoryStatus::Failed => "⚠️",
        }
    }
}

impl std::fmt::Display for HistoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryStatus::Processing => write!(f, "processing"),
            HistoryStatus::Completed => write!(f, "completed"),
            HistoryStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One simulated download in a session's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub site_name: String,
    pub format: String,
    pub status: HistoryStatus,
    pub timestamp: DateTime<Utc>,
}

// ====== TESTS ======
