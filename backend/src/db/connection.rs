use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub type DbPool = PgPool;

const MAX_CONNECTIONS: u32 = 5;

/// Connects with a bounded acquire timeout so a slow database cannot stall
/// leader lookups beyond `acquire_timeout`.
pub async fn create_pool(database_url: &str, acquire_timeout: Duration) -> anyhow::Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await?;
    Ok(pool)
}
