//! Bulk stock synchronisation for trusted internal callers.
//!
//! Reads a JSON list of `{ "product_id", "stock" }` items and applies it as
//! one all-or-nothing batch through [`CatalogService::update_product_stock`].

use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use shopfront_catalog::request::UpdateProductStockRequest;
use shopfront_catalog::CatalogService;
use shopfront_db::models::product::StockUpdateItem;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Default upper bound on how long a single batch may take.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the stock payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(String),
}

/// Runtime options for one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub input: InputSource,
    pub timeout: Duration,
}

impl SyncConfig {
    /// Build from CLI arguments (program name already stripped) and an
    /// environment lookup.
    ///
    /// The first argument is the input path; `-` or no argument reads stdin.
    /// `STOCK_SYNC_TIMEOUT_SECS` overrides [`DEFAULT_TIMEOUT_SECS`].
    pub fn from_parts<I, F>(mut args: I, lookup: F) -> anyhow::Result<Self>
    where
        I: Iterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let input = match args.next() {
            None => InputSource::Stdin,
            Some(path) if path == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(path),
        };

        let timeout_secs = match lookup("STOCK_SYNC_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw.trim().parse().with_context(|| {
                format!("STOCK_SYNC_TIMEOUT_SECS must be a valid u64, got '{raw}'")
            })?,
        };

        Ok(Self {
            input,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Read the whole stock payload from `input`.
pub async fn read_input(input: &InputSource) -> anyhow::Result<String> {
    match input {
        InputSource::Stdin => read_to_end(tokio::io::stdin())
            .await
            .context("Failed to read stock payload from stdin"),
        InputSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read stock payload from {path}")),
    }
}

async fn read_to_end<R: AsyncRead + Unpin>(mut reader: R) -> std::io::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).await?;
    Ok(buf)
}

/// Accepted payload shapes: a bare array or `{ "items": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Bare(Vec<StockUpdateItem>),
    Wrapped(UpdateProductStockRequest),
}

/// Parse a stock payload into a service request.
pub fn parse_payload(raw: &str) -> anyhow::Result<UpdateProductStockRequest> {
    let payload: Payload =
        serde_json::from_str(raw).context("stock payload is not a list of {product_id, stock}")?;
    Ok(match payload {
        Payload::Bare(items) => UpdateProductStockRequest { items },
        Payload::Wrapped(req) => req,
    })
}

/// Apply `request` within `timeout`.
///
/// On timeout the in-flight future is dropped; an uncommitted transaction is
/// rolled back with it.
pub async fn apply(
    service: &CatalogService,
    request: &UpdateProductStockRequest,
    timeout: Duration,
) -> anyhow::Result<()> {
    tokio::time::timeout(timeout, service.update_product_stock(request))
        .await
        .with_context(|| format!("stock batch did not finish within {}s", timeout.as_secs()))?
        .context("stock batch failed")?;
    Ok(())
}
