/// Database connection pool and preference queries for CreatorHub.
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

use crate::errors::CreatorHubResult;
use crate::models::Preferences;

/// Create SQLite connection pool with WAL mode and busy timeout.
pub async fn create_pool(database_url: &str) -> CreatorHubResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(10))
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("Connected to database: {}", database_url);
    Ok(pool)
}

/// Run migrations from the migrations directory.
pub async fn run_migrations(pool: &SqlitePool) -> CreatorHubResult<()> {
    sqlx::migrate!("../migrations").run(pool).await?;

    info!("Database migrations completed");
    Ok(())
}

/// Fetch a chat's preferences, falling back to the defaults row when the
/// chat has never saved any.
pub async fn get_preferences(pool: &SqlitePool, chat_id: i64) -> CreatorHubResult<Preferences> {
    let prefs = sqlx::query_as::<_, Preferences>(
        r#"
        SELECT chat_id, theme, language, auto_save, notifications, updated_at
        FROM preferences WHERE chat_id = ?
        "#,
    )
    .bind(chat_id)
    .fetch_optional(pool)
    .await?;

    Ok(prefs.unwrap_or_else(|| Preferences::default_for(chat_id)))
}

/// Insert or update a chat's preferences.
pub async fn upsert_preferences(pool: &SqlitePool, prefs: &Preferences) -> CreatorHubResult<()> {
    sqlx::query(
        r#"
        INSERT INTO preferences (chat_id, theme, language, auto_save, notifications)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(chat_id) DO UPDATE SET
            theme = excluded.theme,
            language = excluded.language,
            auto_save = excluded.auto_save,
            notifications = excluded.notifications,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(prefs.chat_id)
    .bind(&prefs.theme)
    .bind(&prefs.language)
    .bind(prefs.auto_save)
    .bind(prefs.notifications)
    .execute(pool)
    .await?;

    Ok(())
}
