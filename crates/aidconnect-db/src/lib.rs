//! # AidConnect DB
//!
//! PostgreSQL connection pool for the AidConnect API.
//!
//! The request store is a single `aid_requests` table (see `migrations/`).
//! Every service function takes a `&PgPool` borrowed from application state.
//!
//! ```ignore
//! use aidconnect_db::init_db_pool;
//!
//! let pool = init_db_pool().await;
//! ```

use std::env;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

/// Default upper bound on pooled connections when `DATABASE_MAX_CONNECTIONS` is unset.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Initializes a PostgreSQL connection pool.
///
/// Reads `DATABASE_URL` (required) and `DATABASE_MAX_CONNECTIONS` (optional).
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the database cannot be reached.
/// This is only called once at startup, before the server binds.
pub async fn init_db_pool() -> sqlx::PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    tracing::info!(max_connections, "Connecting to database");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

/// Applies the embedded migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &sqlx::PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
