//! # Database Module
//!
//! Connection setup and schema management for the SQLite store.
//!
//! ## Key Components
//!
//! - `connect`: opens a connection pool for a SQLite URL
//! - `create_schema` / `drop_schema`: the `db-create` and `db-drop` commands
//! - `seed`: sample rows for the `db-seed` command
//!
//! Record-level queries live next to their handlers
//! (`auth::users`, `planets::db`).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use planetary_api::backend::db;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let pool = db::connect("sqlite://planets.db?mode=rwc").await?;
//! db::create_schema(&pool).await?;
//! # Ok(())
//! # }
//! ```

pub mod seed;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Maximum pooled connections for file-backed databases
const MAX_CONNECTIONS: u32 = 5;

/// Open a connection pool for a SQLite URL
///
/// The database file is created when missing. An in-memory database only
/// exists on its connection, so it gets a single connection that is never
/// recycled.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?
    };

    tracing::info!("Database connection pool created");
    Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create the `users` and `planets` tables if they do not exist
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(include_str!("schema.sql")).execute(pool).await?;
    tracing::info!("Database schema created");
    Ok(())
}

/// Drop the `users` and `planets` tables
pub async fn drop_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS users; DROP TABLE IF EXISTS planets;")
        .execute(pool)
        .await?;
    tracing::info!("Database schema dropped");
    Ok(())
}
