use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::ServerConfig;

/// Build the shared connection pool.
///
/// Connections are checked out per statement and returned to the pool when
/// the statement finishes, whether it succeeded or not.
pub async fn connect_pool(config: &ServerConfig) -> Result<PgPool> {
    info!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout_secs,
        "Connecting to database..."
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(config.database_url())
        .await
        .context("Failed to connect to database")
}

/// Apply the SQL migrations shipped in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")?;
    info!("✅ Migrations applied successfully");
    Ok(())
}
