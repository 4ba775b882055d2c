//! Database connection pool

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;
use crate::error::Result;

/// Create a bounded, lazily connecting Postgres pool.
///
/// Acquiring a connection fails after `upstream_timeout` instead of queueing
/// forever when the database is unreachable.
pub fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.upstream_timeout)
        .connect_lazy(&config.database_url)?;

    tracing::info!(
        "Database pool configured (max {} connections)",
        config.max_connections
    );

    Ok(pool)
}
