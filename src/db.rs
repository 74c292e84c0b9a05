//! Database connection pool and schema management.
//!
//! This module provides utilities for:
//! - Creating and managing a PostgreSQL connection pool
//! - Applying the bundled migrations at startup
//! - Rebuilding the schema from scratch (`db-create`)

use std::time::Duration;

use sqlx::{Pool, Postgres};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// The pool connects eagerly so an unreachable database is reported at
/// startup rather than on the first request.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection string is invalid
/// - Cannot connect to PostgreSQL server
/// - Database authentication fails
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Migrations are tracked in the `_sqlx_migrations` table, so each migration runs only once.
///
/// # Errors
///
/// Returns an error if:
/// - SQL syntax errors in migration files
/// - Database errors during migration execution
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro reads migrations at compile time from ./migrations directory
    sqlx::migrate!("./migrations").run(pool).await
}

/// Drop every table owned by the service and re-apply the migrations.
///
/// Destroys all stored accounts. Intended for local development only.
pub async fn recreate_schema(pool: &DbPool) -> anyhow::Result<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("DROP TABLE IF EXISTS accounts")
        .execute(&mut *tx)
        .await?;
    // Forget applied migrations so the next run recreates the tables
    sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    run_migrations(pool).await?;
    Ok(())
}
