//! Persistence layer for the Sportify backend.
//!
//! Provides the SQLite connection pool, compile-time embedded migrations,
//! and the repository layer for exercise records.

pub mod models;
pub mod repositories;

use sqlx::sqlite::SqlitePoolOptions;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// For `sqlite:` URLs the database file is created if it does not already
/// exist.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    // SQLite refuses to open a missing file unless mode=rwc is requested.
    let url = if database_url.starts_with("sqlite:") && !database_url.contains('?') {
        format!("{database_url}?mode=rwc")
    } else {
        database_url.to_owned()
    };

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations embedded at compile time from `migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
