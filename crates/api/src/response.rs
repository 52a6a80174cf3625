//! Shared response envelope types.
//!
//! Every successful endpoint wraps its payload in `{ "success": true,
//! "data": ... }`; failures are produced by [`crate::error::AppError`]
//! with the matching `{ "success": false, "error": ... }` shape. Using
//! these types instead of ad-hoc `json!` blocks keeps the envelope
//! consistent across handlers.

use serde::Serialize;

/// Standard success envelope wrapping a data payload.
///
/// Mutating endpoints attach a human-readable `message` ("Profile updated
/// successfully"); reads leave it out and the field is skipped.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in a plain success envelope.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    /// Wrap a payload with a success message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

/// Success envelope for endpoints with no payload (deletes).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// One page of results with pagination totals, nested under `data`.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

/// Pagination metadata for feed-shaped responses that keep their items
/// under a named key instead of `data`.
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}
