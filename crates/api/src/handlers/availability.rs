//! Handlers for the caller's weekly availability (`/users/availability`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveTime;
use serde::Deserialize;
use skillswap_core::availability::{self, DayOfWeek};
use skillswap_core::error::CoreError;
use skillswap_core::types::DbId;
use skillswap_db::models::availability::{Availability, CreateAvailability};
use skillswap_db::repositories::AvailabilityRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/availability`. Times are `HH:MM:SS`.
#[derive(Debug, Deserialize)]
pub struct CreateAvailabilityRequest {
    #[serde(alias = "dayOfWeek")]
    pub day_of_week: String,
    #[serde(alias = "startTime")]
    pub start_time: NaiveTime,
    #[serde(alias = "endTime")]
    pub end_time: NaiveTime,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users/availability
pub async fn list_mine(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<Availability>>>> {
    let slots = AvailabilityRepo::list_for_user(&state.pool, auth_user.id).await?;
    Ok(Json(ApiResponse::new(slots)))
}

/// POST /api/v1/users/availability
///
/// Add a weekly slot. Slots must have a non-empty time range within one
/// day; repeating an existing (day, start) pair is a conflict.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateAvailabilityRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Availability>>)> {
    let day_of_week = DayOfWeek::parse(&input.day_of_week).ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "day_of_week must be MONDAY through SUNDAY".into(),
        ))
    })?;
    availability::validate_slot(input.start_time, input.end_time)?;

    let slot = AvailabilityRepo::create(
        &state.pool,
        &CreateAvailability {
            user_id: auth_user.id,
            day_of_week,
            start_time: input.start_time,
            end_time: input.end_time,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(slot))))
}

/// DELETE /api/v1/users/availability/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = AvailabilityRepo::delete_for_user(&state.pool, id, auth_user.id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Availability slot",
            id,
        }));
    }
    Ok(Json(MessageResponse::new(
        "Availability slot deleted successfully",
    )))
}
