//! Shop entity model and DTOs.

use serde::{Deserialize, Serialize};
use shopfront_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A shop row from the `shops` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shop {
    pub id: DbId,
    /// The single user who owns this shop and, transitively, its products.
    pub user_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new shop.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShop {
    pub user_id: DbId,
    pub name: String,
}
