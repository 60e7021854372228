//! Page-based pagination helpers.
//!
//! List endpoints address results by a 1-based `page` and a `limit` (page
//! size). The helpers here normalize caller input and derive the metadata
//! returned alongside each page.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page returned when the caller does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Default number of rows per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

// ---------------------------------------------------------------------------
// Clamping
// ---------------------------------------------------------------------------

/// Clamp a user-provided page number to `>= 1`, defaulting to [`DEFAULT_PAGE`].
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(DEFAULT_PAGE).max(1)
}

/// Clamp a user-provided page size to `>= 1`, using `default` when absent.
///
/// Any positive page size is used as given.
pub fn clamp_limit(limit: Option<i64>, default: i64) -> i64 {
    limit.unwrap_or(default).max(1)
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Row offset of the first item on `page`.
///
/// Both arguments must already be clamped to `>= 1`.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page - 1).saturating_mul(limit)
}

/// Number of pages needed to hold `total` rows, i.e. `ceil(total / limit)`.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Pagination metadata returned with every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total_data: i64,
    pub total_page: i64,
}

impl PageMeta {
    pub fn new(page: i64, limit: i64, total_data: i64) -> Self {
        Self {
            page,
            limit,
            total_data,
            total_page: total_pages(total_data, limit),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
