//! Database connection pool and migration management.
//!
//! Each service owns exactly one table in its own database. The table can
//! optionally be namespaced into a PostgreSQL schema; when one is
//! configured, every pooled connection gets it as its `search_path`, so
//! migrations and queries use unqualified table names.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Migrations for the Transaction Service's `transactions` table.
pub static TRANSACTION_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/transactions");

/// Migrations for the Notification Service's `notifications` table.
pub static NOTIFICATION_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/notifications");

/// Create a new PostgreSQL connection pool.
///
/// When `schema` is set it is created if missing before the pool is built.
/// The name must already have been validated as a plain identifier (see
/// [`crate::config`]).
///
/// # Errors
///
/// Returns an error if:
/// - Database connection string is invalid
/// - Cannot connect to PostgreSQL server
/// - The schema cannot be created
pub async fn create_pool(
    database_url: &str,
    schema: Option<&str>,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(database_url)?;

    if let Some(schema) = schema {
        ensure_schema(options.clone(), schema).await?;
        options = options.options([("search_path", schema)]);
    }

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create `schema` using a short-lived single-connection pool.
async fn ensure_schema(options: PgConnectOptions, schema: &str) -> Result<(), sqlx::Error> {
    let bootstrap = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query(&format!(r#"CREATE SCHEMA IF NOT EXISTS "{schema}""#))
        .execute(&bootstrap)
        .await?;

    bootstrap.close().await;
    tracing::info!(schema, "Database schema ready");

    Ok(())
}

/// Run a service's embedded migrations.
///
/// Migrations are tracked in the `_sqlx_migrations` table of the active
/// schema, so each one runs only once per namespace.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn run_migrations(
    pool: &DbPool,
    migrator: &Migrator,
) -> Result<(), sqlx::migrate::MigrateError> {
    migrator.run(pool).await
}
