//! Shared domain types for the shopfront catalog.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the catalog service, and any CLI tooling alike.

pub mod error;
pub mod pagination;
pub mod types;
