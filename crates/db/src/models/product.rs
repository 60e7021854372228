//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use shopfront_core::types::{DbId, MinorUnits, Timestamp};
use sqlx::FromRow;

/// A product row from the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub shop_id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: MinorUnits,
    pub stock: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Always `None` on rows returned by reads and updates.
    #[serde(skip_serializing)]
    pub deleted_at: Option<Timestamp>,
}

/// DTO for inserting a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub shop_id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: MinorUnits,
    pub stock: i32,
}

/// DTO for replacing the mutable fields of a product.
///
/// Unlike most patch DTOs every field is required: an update overwrites
/// all of them.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: MinorUnits,
    pub stock: i32,
}

/// One element of a batch stock update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct StockUpdateItem {
    pub product_id: DbId,
    pub stock: i32,
}

/// Filters accepted by [`ProductRepo::list`](crate::repositories::ProductRepo::list).
///
/// Every field is optional; present fields are AND-combined.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    /// Restrict to these ids. An empty list means "no id filter".
    #[serde(default)]
    pub ids: Vec<DbId>,
    pub shop_id: Option<DbId>,
    pub category_id: Option<DbId>,
    /// Case-insensitive substring match on `name`. An empty string is ignored.
    pub name: Option<String>,
    /// Inclusive lower price bound.
    pub price_min: Option<MinorUnits>,
    /// Inclusive upper price bound.
    pub price_max: Option<MinorUnits>,
    /// `Some(true)` keeps only rows with `stock > 0`.
    pub is_available: Option<bool>,
}

/// A page of products plus the number of rows matching the filter.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub items: Vec<Product>,
    /// Count across all pages. Zero when the page is past the end.
    pub total_data: i64,
}

/// Row shape for the windowed list query.
#[derive(Debug, FromRow)]
pub(crate) struct ProductListRow {
    pub total_data: i64,
    #[sqlx(flatten)]
    pub product: Product,
}
