//! Catalog service: ownership gate, not-found classification, and list shaping.

use std::time::Instant;

use shopfront_core::error::CoreError;
use shopfront_core::pagination::PageMeta;
use shopfront_core::types::DbId;
use shopfront_db::repositories::{ProductRepo, ShopRepo};
use shopfront_db::DbPool;

use crate::error::CatalogResult;
use crate::request::{
    CreateProductRequest, DeleteProductRequest, GetProductsRequest, UpdateProductRequest,
    UpdateProductStockRequest,
};
use crate::response::{GetProductsResponse, UpsertProductResponse};

/// Reason attached to `Forbidden` when the caller does not own the shop.
pub const NOT_SHOP_OWNER: &str = "User is not shop owner";

/// Reason attached to `Forbidden` when the caller does not own the product.
pub const NOT_PRODUCT_OWNER: &str = "User is not product owner";

/// Stateless product catalog operations over a shared connection pool.
///
/// Cheap to clone; every method may run concurrently with any other. Dropping
/// a returned future cancels the in-flight statement, and an uncommitted
/// stock batch is rolled back when its transaction is dropped.
#[derive(Clone)]
pub struct CatalogService {
    pool: DbPool,
}

impl CatalogService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a product after confirming the caller owns the target shop.
    pub async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> CatalogResult<UpsertProductResponse> {
        let is_owner = ShopRepo::is_owner(&self.pool, req.user_id, req.shop_id)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, shop_id = %req.shop_id, "Shop ownership check failed");
            })?;
        if !is_owner {
            tracing::warn!(
                user_id = %req.user_id,
                shop_id = %req.shop_id,
                "Rejected product create: user is not shop owner",
            );
            return Err(CoreError::Forbidden(NOT_SHOP_OWNER.to_string()).into());
        }

        let product = ProductRepo::create(&self.pool, &req.to_create())
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, shop_id = %req.shop_id, "Product create failed");
            })?;

        tracing::info!(
            product_id = %product.id,
            shop_id = %product.shop_id,
            user_id = %req.user_id,
            "Product created",
        );

        Ok(UpsertProductResponse {
            product,
            user_id: req.user_id,
        })
    }

    /// List one page of products.
    ///
    /// An empty page is reported as `NoneFound`, including a page past the
    /// last one, rather than as an empty success.
    pub async fn get_products(
        &self,
        req: &GetProductsRequest,
    ) -> CatalogResult<GetProductsResponse> {
        let page = req.page();
        let limit = req.limit();

        let result = ProductRepo::list(&self.pool, &req.filter, page, limit)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, page, limit, "Product list failed");
            })?;

        if result.items.is_empty() {
            tracing::warn!(page, limit, filter = ?req.filter, "Products not found");
            return Err(CoreError::NoneFound("Products").into());
        }

        Ok(GetProductsResponse {
            items: result.items,
            meta: PageMeta::new(page, limit, result.total_data),
        })
    }

    /// Overwrite a product after confirming the caller owns it.
    ///
    /// Ownership is checked first, so a non-owner gets `Forbidden` even for a
    /// soft-deleted product; an owner gets `NotFound` for one.
    pub async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> CatalogResult<UpsertProductResponse> {
        self.ensure_product_owner(req.user_id, req.product_id, "update")
            .await?;

        let product = ProductRepo::update(&self.pool, req.product_id, &req.to_update())
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, product_id = %req.product_id, "Product update failed");
            })?
            .ok_or_else(|| {
                tracing::warn!(product_id = %req.product_id, "Product not found for update");
                CoreError::NotFound {
                    entity: "Product",
                    id: req.product_id,
                }
            })?;

        tracing::info!(
            product_id = %product.id,
            user_id = %req.user_id,
            "Product updated",
        );

        Ok(UpsertProductResponse {
            product,
            user_id: req.user_id,
        })
    }

    /// Soft-delete a product after confirming the caller owns it.
    ///
    /// Succeeds even when the product is already deleted.
    pub async fn delete_product(&self, req: &DeleteProductRequest) -> CatalogResult<()> {
        self.ensure_product_owner(req.user_id, req.product_id, "delete")
            .await?;

        let rows = ProductRepo::soft_delete(&self.pool, req.product_id)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, product_id = %req.product_id, "Product delete failed");
            })?;

        tracing::info!(
            product_id = %req.product_id,
            user_id = %req.user_id,
            rows,
            "Product soft-deleted",
        );
        Ok(())
    }

    /// Apply a batch of stock levels atomically.
    ///
    /// Each updated product's `updated_at` moves to the batch time.
    ///
    /// There is no ownership gate here; callers must be trusted or authorize
    /// at a higher layer.
    pub async fn update_product_stock(
        &self,
        req: &UpdateProductStockRequest,
    ) -> CatalogResult<()> {
        let started = Instant::now();

        let rows = ProductRepo::update_stock_batch(&self.pool, &req.items)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    items = req.items.len(),
                    "Stock batch failed, nothing applied",
                );
            })?;

        tracing::debug!(
            items = req.items.len(),
            rows,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Stock batch applied",
        );
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn ensure_product_owner(
        &self,
        user_id: DbId,
        product_id: DbId,
        action: &str,
    ) -> CatalogResult<()> {
        let is_owner = ProductRepo::is_owner(&self.pool, user_id, product_id)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    product_id = %product_id,
                    "Product ownership check failed",
                );
            })?;
        if is_owner {
            return Ok(());
        }
        tracing::warn!(
            user_id = %user_id,
            product_id = %product_id,
            "Rejected product {action}: user is not product owner",
        );
        Err(CoreError::Forbidden(NOT_PRODUCT_OWNER.to_string()).into())
    }
}
