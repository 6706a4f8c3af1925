use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config;

/// Errors from pool construction and connectivity checks
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the shared connection pool from configuration.
///
/// The pool is handed to handlers through `AppState` rather than living in a
/// process-wide singleton. Connections are established lazily, so the process
/// boots even when the database is not reachable yet; connection errors
/// surface on the first query instead.
pub fn connect() -> Result<PgPool, StoreError> {
    let db = &config::config().database;

    let pool = PgPoolOptions::new()
        .max_connections(db.max_connections)
        .acquire_timeout(Duration::from_secs(db.connection_timeout))
        .connect_lazy(&db.url)
        .map_err(|e| StoreError::InvalidDatabaseUrl(e.to_string()))?;

    info!("Initialized database pool (max_connections={})", db.max_connections);
    Ok(pool)
}

/// Pings the database to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations from ./migrations
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
