use crate::types::DbId;

/// Domain-level error outcomes.
///
/// Infrastructure failures (connectivity, constraint violations) are not
/// represented here; they travel as the underlying driver error so callers
/// can tell the two classes apart.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A list query matched nothing. The payload is the plural entity name.
    #[error("{0} not found")]
    NoneFound(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
