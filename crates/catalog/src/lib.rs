//! Product catalog service.
//!
//! Sits between an outer transport layer and the repositories: it applies
//! the ownership gate before every owner-scoped mutation, turns "no rows"
//! into domain errors, and shapes list responses with pagination metadata.
//!
//! Each call is independent. The ownership check and the mutation it guards
//! run as two separate statements, so ownership may change in between.

pub mod error;
pub mod request;
pub mod response;
pub mod service;

pub use error::{CatalogError, CatalogResult};
pub use service::CatalogService;
