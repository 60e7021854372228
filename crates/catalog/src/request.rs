//! Typed requests accepted by the catalog service.
//!
//! Callers are expected to have parsed and validated these already; the
//! service only normalizes pagination input.

use serde::Deserialize;
use shopfront_core::pagination::{clamp_limit, clamp_page, DEFAULT_PAGE_LIMIT};
use shopfront_core::types::{DbId, MinorUnits};
use shopfront_db::models::product::{CreateProduct, ProductFilter, StockUpdateItem, UpdateProduct};

/// Create a product in a shop the caller owns.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub user_id: DbId,
    pub shop_id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: MinorUnits,
    pub stock: i32,
}

impl CreateProductRequest {
    pub fn to_create(&self) -> CreateProduct {
        CreateProduct {
            shop_id: self.shop_id,
            category_id: self.category_id,
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            price: self.price,
            stock: self.stock,
        }
    }
}

/// List products with optional filters and page-based pagination.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetProductsRequest {
    #[serde(flatten)]
    pub filter: ProductFilter,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl GetProductsRequest {
    /// Requested page, clamped to `>= 1`.
    pub fn page(&self) -> i64 {
        clamp_page(self.page)
    }

    /// Requested page size, clamped to `>= 1`.
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_PAGE_LIMIT)
    }
}

/// Overwrite a product the caller owns.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductRequest {
    pub user_id: DbId,
    pub product_id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: MinorUnits,
    pub stock: i32,
}

impl UpdateProductRequest {
    pub fn to_update(&self) -> UpdateProduct {
        UpdateProduct {
            category_id: self.category_id,
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Soft-delete a product the caller owns.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeleteProductRequest {
    pub user_id: DbId,
    pub product_id: DbId,
}

/// Set stock levels for many products at once.
///
/// Carries no user: this operation is meant for trusted internal callers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductStockRequest {
    pub items: Vec<StockUpdateItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_products_defaults_to_first_page_of_ten() {
        let req = GetProductsRequest::default();
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn get_products_clamps_non_positive_paging() {
        let req = GetProductsRequest {
            page: Some(0),
            limit: Some(-5),
            ..Default::default()
        };
        assert_eq!(req.page(), 1);
        assert_eq!(req.limit(), 1);
    }

    #[test]
    fn get_products_keeps_large_page_size() {
        let req = GetProductsRequest {
            limit: Some(10_000),
            ..Default::default()
        };
        assert_eq!(req.limit(), 10_000);
    }

    #[test]
    fn get_products_deserializes_flat_filter_fields() {
        let req: GetProductsRequest = serde_json::from_value(serde_json::json!({
            "shop_id": "00000000-0000-0000-0000-000000000000",
            "name": "mug",
            "price_min": 100,
            "is_available": true,
            "page": 2,
            "limit": 5
        }))
        .unwrap();

        assert_eq!(req.filter.shop_id, Some(DbId::nil()));
        assert_eq!(req.filter.name.as_deref(), Some("mug"));
        assert_eq!(req.filter.price_min, Some(100));
        assert_eq!(req.filter.is_available, Some(true));
        assert!(req.filter.ids.is_empty());
        assert_eq!(req.page(), 2);
        assert_eq!(req.limit(), 5);
    }

    #[test]
    fn stock_request_parses_item_list() {
        let req: UpdateProductStockRequest = serde_json::from_value(serde_json::json!({
            "items": [
                { "product_id": "00000000-0000-0000-0000-000000000000", "stock": 12 }
            ]
        }))
        .unwrap();
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].stock, 12);
    }
}
