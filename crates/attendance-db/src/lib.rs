//! # Attendance DB
//!
//! Postgres pool construction and schema management for the setup tooling.
//!
//! - [`connect`] opens a pool from [`DatabaseConfig`]
//! - [`schema`] creates and drops the identity and profile tables
//!
//! # Example
//!
//! ```ignore
//! use attendance_db::{connect, schema};
//!
//! let pool = connect(&config.database).await?;
//! let mut conn = pool.acquire().await?;
//! schema::ensure_schema(&mut conn).await?;
//! ```

pub mod schema;

use attendance_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

pub use schema::{drop_schema, ensure_schema, rebuild_schema, schema_exists};
pub use sqlx::PgPool;

/// Opens a Postgres pool and verifies it can hand out a connection.
///
/// Connectivity failures are returned rather than retried; the caller treats
/// them as fatal.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout)
        .connect(&config.url)
        .await?;

    tracing::debug!(
        max_connections = config.max_connections,
        "Database pool established"
    );

    Ok(pool)
}
