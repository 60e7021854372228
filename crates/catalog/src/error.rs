use shopfront_core::error::CoreError;

/// Error type returned by [`CatalogService`](crate::CatalogService).
///
/// [`CoreError`] carries domain outcomes (forbidden, not found); database
/// failures are passed through untouched as [`sqlx::Error`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A domain-level error from `shopfront_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for service return values.
pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// `true` for domain outcomes, `false` for infrastructure failures.
    pub fn is_domain(&self) -> bool {
        matches!(self, CatalogError::Core(_))
    }

    /// HTTP-style status code for outer layers that report one.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::NoneFound(_) => 404,
                CoreError::Validation(_) => 400,
                CoreError::Forbidden(_) => 403,
                CoreError::Internal(_) => 500,
            },
            CatalogError::Database(_) => 500,
        }
    }
}
