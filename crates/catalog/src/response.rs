//! Response shapes returned by the catalog service.

use serde::Serialize;
use shopfront_core::pagination::PageMeta;
use shopfront_core::types::DbId;
use shopfront_db::models::product::Product;

/// A created or updated product, with the acting user echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct UpsertProductResponse {
    #[serde(flatten)]
    pub product: Product,
    pub user_id: DbId,
}

/// One page of products and its pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct GetProductsResponse {
    pub items: Vec<Product>,
    pub meta: PageMeta,
}
