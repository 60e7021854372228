//! Data-access layer for the shopfront catalog.
//!
//! Exposes pool construction, row models, and the repositories. The schema
//! lives in `db/migrations` at the workspace root.
//!
//! Repositories never classify "no rows" as an error; that is left to the
//! catalog service.
//!
//! Product updates bump `products.updated_at`, and so does the stock batch
//! in [`repositories::ProductRepo::update_stock_batch`]. Soft delete only
//! sets `deleted_at`.

pub mod config;
pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

use crate::config::DbConfig;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from [`DbConfig`].
pub async fn create_pool_with_config(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
