//! Repository for the `products` table.

use shopfront_core::pagination::page_offset;
use shopfront_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{
    CreateProduct, Product, ProductFilter, ProductListRow, ProductPage, StockUpdateItem,
    UpdateProduct,
};
use crate::repositories::product_filter::{bind_product_values, build_product_filter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, shop_id, category_id, name, description, image_url, price, stock, \
                       created_at, updated_at, deleted_at";

/// Provides listing, mutation, and ownership checks for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// Foreign-key and CHECK violations surface as `sqlx::Error::Database`.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (shop_id, category_id, name, description, image_url, price, stock)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(input.shop_id)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.price)
            .bind(input.stock)
            .fetch_one(pool)
            .await
    }

    /// Find a product by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM products WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of products matching `filter`, newest first.
    ///
    /// The total match count is computed with a window function in the same
    /// statement, so a page and its metadata cost a single round trip.
    /// `page` and `limit` must already be clamped to `>= 1`.
    pub async fn list(
        pool: &PgPool,
        filter: &ProductFilter,
        page: i64,
        limit: i64,
    ) -> Result<ProductPage, sqlx::Error> {
        let (where_clause, bind_values, bind_idx) = build_product_filter(filter);

        let query = format!(
            "SELECT COUNT(*) OVER() AS total_data, {COLUMNS} FROM products {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let q = bind_product_values(sqlx::query_as::<_, ProductListRow>(&query), &bind_values);
        let rows = q
            .bind(limit)
            .bind(page_offset(page, limit))
            .fetch_all(pool)
            .await?;

        let total_data = rows.first().map_or(0, |row| row.total_data);
        let items = rows.into_iter().map(|row| row.product).collect();

        Ok(ProductPage { items, total_data })
    }

    /// Overwrite the mutable fields of a product and bump `updated_at`.
    ///
    /// Returns `None` if no non-deleted row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                category_id = $2,
                name = $3,
                description = $4,
                image_url = $5,
                price = $6,
                stock = $7,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.price)
            .bind(input.stock)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a product by ID. Returns the number of rows marked deleted.
    ///
    /// Zero rows (unknown or already deleted id) is not an error.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE products SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Set the stock of many products in a single transaction.
    ///
    /// Every row the batch touches also gets `updated_at = NOW()`, so a stock
    /// sync shows up as the product's latest modification.
    ///
    /// Items are applied in order, so a repeated product id ends with the
    /// last value. Items whose id matches no live row affect zero rows and do
    /// not fail the batch. Any statement error returns early, dropping the
    /// transaction uncommitted so that no item in the batch persists.
    ///
    /// Returns the total number of rows updated.
    pub async fn update_stock_batch(
        pool: &PgPool,
        items: &[StockUpdateItem],
    ) -> Result<u64, sqlx::Error> {
        if items.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;
        let mut affected = 0u64;

        for item in items {
            let result = sqlx::query(
                "UPDATE products SET stock = $2, updated_at = NOW() \
                 WHERE id = $1 AND deleted_at IS NULL",
            )
            .bind(item.product_id)
            .bind(item.stock)
            .execute(&mut *tx)
            .await?;
            affected += result.rows_affected();
        }

        tx.commit().await?;

        tracing::debug!(
            items = items.len(),
            rows_affected = affected,
            "Stock batch committed",
        );
        Ok(affected)
    }

    /// Whether `user_id` owns the product through a non-deleted shop.
    ///
    /// The product's own deletion state is ignored: this answers who may act
    /// on the row, not whether the row is still visible.
    pub async fn is_owner(
        pool: &PgPool,
        user_id: DbId,
        product_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1
                FROM products p
                JOIN shops s ON s.id = p.shop_id
                WHERE s.user_id = $1
                  AND p.id = $2
                  AND s.deleted_at IS NULL
             )",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_one(pool)
        .await
    }
}
