use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;

/// Schema migrations embedded at compile time from `services/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Initialize a PostgreSQL connection pool and bring the schema up to date.
pub async fn create_pool(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new().connect(config.database_url()).await?;

    tracing::info!("Database connection pool established");

    MIGRATOR.run(&pool).await?;

    tracing::info!("Database migrations applied");

    Ok(pool)
}
