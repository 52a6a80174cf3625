//! Handlers for the notification feed.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use skillswap_core::pagination;
use skillswap_db::models::swap_request::SwapRequestDetail;
use skillswap_db::repositories::SwapRequestRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{ApiResponse, PageMeta};
use crate::state::AppState;

/// Pending received requests plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct NotificationFeed {
    pub notifications: Vec<SwapRequestDetail>,
    pub pagination: PageMeta,
}

/// GET /api/v1/notifications
///
/// The caller's pending received swap requests, newest first. A pure
/// view of open requests: reading the feed marks nothing, and resolving
/// a request removes it.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(input): Query<PageParams>,
) -> AppResult<Json<ApiResponse<NotificationFeed>>> {
    let page = pagination::clamp_page(input.page);
    let limit = pagination::clamp_limit(input.limit);

    let (notifications, total) = SwapRequestRepo::pending_received_page(
        &state.pool,
        auth_user.id,
        limit,
        pagination::offset(page, limit),
    )
    .await?;

    Ok(Json(ApiResponse::new(NotificationFeed {
        notifications,
        pagination: PageMeta {
            page,
            limit,
            total,
            total_pages: pagination::total_pages(total, limit),
        },
    })))
}
