//! Shared query parameter types.

use serde::Deserialize;

/// Generic 1-based pagination parameters (`?page=&limit=`).
///
/// Raw values; clamp through `skillswap_core::pagination` before use.
/// Unknown query keys are ignored.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
