/// Static product constants and environment-derived runtime settings.

// ====== PRODUCT CONSTANTS ======

pub const APP_NAME: &str = "CreatorHub";
pub const APP_TAGLINE: &str = "Professional Tool Suite";
/// Prompt shown wherever the user can paste a URL.
pub const URL_PROMPT: &str =
    "Enter a link from YouTube, Instagram, LinkedIn, or any supported platform";

/// Upload cap shared by every panel: 50 MB.
pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Extension allow-lists per tool panel.
pub const SUPPORTED_IMAGE_FORMATS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];
pub const SUPPORTED_DOCUMENT_FORMATS: [&str; 4] = ["pdf", "doc", "docx", "txt"];
pub const SUPPORTED_AUDIO_FORMATS: [&str; 4] = ["mp3", "wav", "flac", "aac"];
pub const SUPPORTED_FONT_FORMATS: [&str; 4] = ["ttf", "otf", "woff", "woff2"];

// ====== RUNTIME SETTINGS ======

/// Settings read from the environment at startup (`.env` supported).
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file holding per-chat preferences.
    pub database_path: String,
    /// Idle seconds before a session is swept.
    pub session_ttl_secs: u64,
    /// Reserved for a future backend; read and logged, never called.
    pub api_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| "./creatorhub.db".to_string());
        let session_ttl_secs = std::env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| "1800".to_string())
            .parse()
            .unwrap_or(1800);
        let api_base_url = std::env::var("CREATORHUB_API_BASE_URL").ok();
        Self {
            database_path,
            session_ttl_secs,
            api_base_url,
        }
    }
}
