/// Error types for the CreatorHub workspace.
use thiserror::Error;

/// Top-level error for shared infrastructure.
#[derive(Debug, Error)]
pub enum CreatorHubError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File error: {0}")]
    File(#[from] FileError),
}

/// Validation failure for a panel attachment. The display texts are the
/// exact strings the panels show inline.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FileError {
    #[error("File size exceeds the maximum limit")]
    TooLarge,

    #[error("File format is not supported")]
    UnsupportedFormat,
}

/// Result type alias for CreatorHub operations.
pub type CreatorHubResult<T> = Result<T, CreatorHubError>;

// ====== TESTS ======
