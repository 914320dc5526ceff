//! PostgreSQL connection pool and schema migrations.

use sqlx::PgPool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Migrations embedded from `migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors raised while preparing the database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to PostgreSQL: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Connects a pool to `database_url` and brings the schema up to date.
///
/// # Errors
///
/// Returns `DatabaseError::Connect` if the pool cannot be created and
/// `DatabaseError::Migrate` if a migration fails.
pub async fn connect_and_migrate(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    MIGRATOR.run(&pool).await?;
    tracing::info!(max_connections, "PostgreSQL pool ready, migrations applied");

    Ok(pool)
}
