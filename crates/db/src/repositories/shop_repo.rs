//! Repository for the `shops` table.

use shopfront_core::types::DbId;
use sqlx::PgPool;

use crate::models::shop::{CreateShop, Shop};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, created_at, updated_at, deleted_at";

/// Provides creation, lookup, and ownership checks for shops.
pub struct ShopRepo;

impl ShopRepo {
    /// Insert a new shop, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateShop) -> Result<Shop, sqlx::Error> {
        let query = format!(
            "INSERT INTO shops (user_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shop>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a shop by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Shop>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shops WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Shop>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether `user_id` owns the non-deleted shop `shop_id`.
    ///
    /// A missing or soft-deleted shop yields `false`, never an error.
    pub async fn is_owner(
        pool: &PgPool,
        user_id: DbId,
        shop_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM shops
                WHERE user_id = $1 AND id = $2 AND deleted_at IS NULL
             )",
        )
        .bind(user_id)
        .bind(shop_id)
        .fetch_one(pool)
        .await
    }

    /// Soft-delete a shop by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE shops SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
