use std::time::Duration;

use anyhow::Result;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use tracing::info;

pub mod users;

pub use users::{PgUserStore, StoreError, UserStore};

pub type DatabasePool = Pool<Postgres>;

pub async fn setup_database(database_url: &str) -> Result<DatabasePool> {
    info!("Connecting to database");

    let pool = PgPoolOptions::new()
        .max_connections(20)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(3))
        .idle_timeout(Duration::from_secs(180))
        .test_before_acquire(true)
        .connect(database_url)
        .await?;

    // Probe the connection before handing the pool out
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
