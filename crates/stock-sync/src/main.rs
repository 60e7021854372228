use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopfront_catalog::CatalogService;
use shopfront_db::config::DbConfig;
use shopfront_stock_sync::{apply, parse_payload, read_input, SyncConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopfront_stock_sync=debug,shopfront_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let sync_config = SyncConfig::from_parts(std::env::args().skip(1), |key| {
        std::env::var(key).ok()
    })?;
    let db_config = DbConfig::from_env()?;
    tracing::info!(
        input = ?sync_config.input,
        timeout_secs = sync_config.timeout.as_secs(),
        "Loaded stock sync configuration",
    );

    // --- Database ---
    let pool = shopfront_db::create_pool_with_config(&db_config)
        .await
        .context("Failed to connect to database")?;
    shopfront_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    // --- Payload ---
    let raw = read_input(&sync_config.input).await?;
    let request = parse_payload(&raw)?;
    tracing::info!(items = request.items.len(), "Parsed stock payload");

    // --- Apply ---
    let service = CatalogService::new(pool.clone());
    apply(&service, &request, sync_config.timeout).await?;
    tracing::info!(items = request.items.len(), "Stock sync complete");

    pool.close().await;
    Ok(())
}
