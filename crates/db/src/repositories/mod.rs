//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Repositories return raw
//! `sqlx::Error`s and report absence as `Option`/`bool`/row counts.

mod product_filter;
pub mod product_repo;
pub mod shop_repo;

pub use product_repo::ProductRepo;
pub use shop_repo::ShopRepo;
