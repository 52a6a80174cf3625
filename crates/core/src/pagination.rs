//! Page-based pagination helpers.
//!
//! List endpoints paginate with 1-based `?page=&limit=` parameters. The
//! clamping lives here so the repository layer and any future tooling agree
//! on the bounds.

/// Default number of items per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Maximum number of items per page.
pub const MAX_PAGE_LIMIT: i64 = 50;

/// Clamp a requested page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a requested page size into `1..=MAX_PAGE_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT)
}

/// Row offset for a (already clamped) page and limit.
pub fn offset(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

/// Total number of pages for `total` rows at `limit` per page.
///
/// Ceiling division; zero rows means zero pages rather than one.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}
