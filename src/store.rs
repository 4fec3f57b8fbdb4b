//! SQLite pool setup and the idempotent `students` DDL.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Path value selecting a private in-memory database.
pub const IN_MEMORY_PATH: &str = ":memory:";

/// `age` and `grade` are part of the schema but no query reads or writes them.
const CREATE_STUDENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        age INTEGER,
        grade TEXT
    )
"#;

/// Open a pool for the configured database file, creating the file if missing.
/// `:memory:` yields a single-connection pool so every query sees the same database.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, AppError> {
    if config.path == IN_MEMORY_PATH {
        return connect_in_memory().await;
    }
    if let Some(parent) = std::path::Path::new(&config.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Db(sqlx::Error::Io(e)))?;
        }
    }
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(path = %config.path, "sqlite pool opened");
    Ok(pool)
}

pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the `students` table if it does not exist.
pub async fn ensure_students_table(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(CREATE_STUDENTS_TABLE).execute(pool).await?;
    Ok(())
}
