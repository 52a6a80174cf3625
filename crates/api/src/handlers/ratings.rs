//! Handlers for post-swap ratings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use skillswap_core::error::CoreError;
use skillswap_core::rating::validate_score;
use skillswap_core::swap::SwapStatus;
use skillswap_core::types::DbId;
use skillswap_db::models::rating::{CreateRating, Rating, RatingWithRater};
use skillswap_db::repositories::{RatingRepo, SwapRequestRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /swaps/{id}/ratings`.
#[derive(Debug, Deserialize)]
pub struct CreateRatingRequest {
    pub rating: i32,
    pub feedback: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/swaps/{id}/ratings
///
/// Rate the other participant of a completed swap. One rating per rater
/// per swap; the rated side is always the participant the caller is not.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateRatingRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Rating>>)> {
    let request = SwapRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Swap request",
            id,
        }))?;

    // 1. Only participants may rate; the other side gets the rating.
    let rated_id = if auth_user.id == request.requester_id {
        request.receiver_id
    } else if auth_user.id == request.receiver_id {
        request.requester_id
    } else {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only participants can rate this swap".into(),
        )));
    };

    // 2. The swap must have actually happened.
    if SwapStatus::parse(&request.status) != Some(SwapStatus::Completed) {
        return Err(AppError::Core(CoreError::InvalidState(
            "Only completed swaps can be rated".into(),
        )));
    }

    // 3. Score bounds, then the one-rating-per-rater rule.
    validate_score(input.rating)?;

    if RatingRepo::exists_for_swap_and_rater(&state.pool, id, auth_user.id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already rated this swap".into(),
        )));
    }

    let rating = RatingRepo::create(
        &state.pool,
        &CreateRating {
            swap_request_id: id,
            rater_id: auth_user.id,
            rated_id,
            rating: input.rating,
            feedback: input.feedback,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            rating,
            "Rating submitted successfully",
        )),
    ))
}

/// GET /api/v1/users/{id}/ratings
///
/// Ratings received by a user, rater embedded, newest first. Public.
pub async fn list_received(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Vec<RatingWithRater>>>> {
    let ratings = RatingRepo::list_received_for_user(&state.pool, id).await?;
    Ok(Json(ApiResponse::new(ratings)))
}
