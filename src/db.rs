use std::{future::Future, time::Duration};

use anyhow::anyhow;
use secrecy::{ExposeSecret, SecretString};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::error::{AppError, AppResult};

pub type DbPool = PgPool;

/// Create a connection pool whose acquire timeout matches the per-call store timeout.
pub async fn create_pool(
    database_url: &SecretString,
    max_connections: u32,
    timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(timeout)
        .connect(database_url.expose_secret())
        .await
}

/// Apply the SQL migrations embedded from `migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Await a single store round-trip, failing with `Internal` once `limit` elapses.
pub async fn timed<T, E, F>(limit: Duration, fut: F) -> AppResult<T>
where
    F: Future<Output = Result<T, E>>,
    E: Into<AppError>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err(AppError::Internal(anyhow!(
            "database call timed out after {limit:?}"
        ))),
    }
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
