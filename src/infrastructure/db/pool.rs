use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;
use tracing::log::LevelFilter;

use crate::common::error::AppResult;

pub type DbPool = Pool<Sqlite>;

/// Opens the process-wide pool and brings the schema up to date.
///
/// An in-memory database lives only as long as its connection, so those
/// URLs get a single connection that is never recycled.
pub async fn connect_to_db(connection_string: &str, max_connections: u32) -> AppResult<DbPool> {
    let options = SqliteConnectOptions::from_str(connection_string)?
        .foreign_keys(true)
        .log_statements(LevelFilter::Debug);

    let pool_options = if connection_string.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .min_connections(1)
            .idle_timeout(Duration::from_secs(600))
    };

    let pool = pool_options
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    info!("✅ Connected to SQLite");
    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> AppResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
