//! Handlers for the `/swaps` resource: creation, lifecycle, listing, and
//! the dashboard summary.
//!
//! Who may drive which status change lives in `skillswap_core::swap`; the
//! conditional UPDATE that makes concurrent transitions safe lives in
//! [`SwapRequestRepo::transition`].

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use skillswap_core::error::CoreError;
use skillswap_core::swap::{self, SwapRole, SwapStatus};
use skillswap_core::types::DbId;
use skillswap_db::models::rating::Rating;
use skillswap_db::models::swap_request::{
    CreateSwapRequest, SwapDirection, SwapListFilter, SwapRequest, SwapRequestDetail, SwapSummary,
};
use skillswap_db::repositories::{RatingRepo, SwapRequestRepo, UserRepo, UserSkillRepo};
use skillswap_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /swaps`.
#[derive(Debug, Deserialize)]
pub struct SwapListQuery {
    /// `sent` or `received`; anything else lists both sides.
    #[serde(rename = "type")]
    pub direction: Option<String>,
    /// Exact status filter (`PENDING`, `ACCEPTED`, ...).
    pub status: Option<String>,
}

/// Request body for `POST /swaps`.
#[derive(Debug, Deserialize)]
pub struct CreateSwapRequestBody {
    #[serde(alias = "receiverId")]
    pub receiver_id: DbId,
    #[serde(alias = "skillOfferedId")]
    pub skill_offered_id: DbId,
    #[serde(alias = "skillWantedId")]
    pub skill_wanted_id: DbId,
    pub message: Option<String>,
}

/// Request body for `PUT /swaps/{id}`.
#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub status: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/swaps
///
/// The caller's swap requests, newest first, with both parties and any
/// ratings embedded.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(input): Query<SwapListQuery>,
) -> AppResult<Json<ApiResponse<Vec<SwapRequestDetail>>>> {
    let direction = match input.direction.as_deref() {
        Some("sent") => Some(SwapDirection::Sent),
        Some("received") => Some(SwapDirection::Received),
        _ => None,
    };

    let status = match input.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(SwapStatus::parse(raw).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown status filter: {raw}"
            )))
        })?),
    };

    let filter = SwapListFilter { direction, status };
    let mut swaps = SwapRequestRepo::list_for_user(&state.pool, auth_user.id, &filter).await?;
    attach_ratings(&state.pool, &mut swaps).await?;

    Ok(Json(ApiResponse::new(swaps)))
}

/// POST /api/v1/swaps
///
/// Send a swap request. The offered listing must belong to the caller,
/// the wanted listing to the receiver, and only one open request per
/// requester/receiver pair is allowed.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateSwapRequestBody>,
) -> AppResult<(StatusCode, Json<ApiResponse<SwapRequestDetail>>)> {
    // 1. No self-swaps.
    if input.receiver_id == auth_user.id {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot send swap request to yourself".into(),
        )));
    }

    // 2. The receiver must exist and be active.
    let receiver = UserRepo::find_by_id(&state.pool, input.receiver_id).await?;
    if !receiver.is_some_and(|user| user.is_active) {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Receiver",
            id: input.receiver_id,
        }));
    }

    // 3. The offered listing must be the caller's, the wanted listing the
    //    receiver's.
    let offered = UserSkillRepo::find_by_id(&state.pool, input.skill_offered_id).await?;
    if !offered.is_some_and(|listing| listing.user_id == auth_user.id) {
        return Err(AppError::Core(CoreError::Validation(
            "skill_offered_id must be one of your own skills".into(),
        )));
    }

    let wanted = UserSkillRepo::find_by_id(&state.pool, input.skill_wanted_id).await?;
    if !wanted.is_some_and(|listing| listing.user_id == input.receiver_id) {
        return Err(AppError::Core(CoreError::Validation(
            "skill_wanted_id must be one of the receiver's skills".into(),
        )));
    }

    // 4. One open request per requester/receiver pair. A partial unique
    //    index backs this up against concurrent creates.
    if SwapRequestRepo::has_pending_between(&state.pool, auth_user.id, input.receiver_id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "You already have a pending request to this user".into(),
        )));
    }

    let created = SwapRequestRepo::create(
        &state.pool,
        &CreateSwapRequest {
            requester_id: auth_user.id,
            receiver_id: input.receiver_id,
            skill_offered_id: input.skill_offered_id,
            skill_wanted_id: input.skill_wanted_id,
            message: input.message,
        },
    )
    .await?;

    let detail = SwapRequestRepo::find_detail_by_id(&state.pool, created.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created swap request vanished".into()))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            detail,
            "Swap request sent successfully",
        )),
    ))
}

/// PUT /api/v1/swaps/{id}
///
/// Drive a request through its lifecycle. The receiver accepts or
/// rejects, the requester cancels, and either participant completes an
/// accepted swap.
pub async fn transition(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<TransitionRequest>,
) -> AppResult<Json<ApiResponse<SwapRequestDetail>>> {
    let target = SwapStatus::parse(&input.status)
        .filter(|status| *status != SwapStatus::Pending)
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Invalid status. Must be ACCEPTED, REJECTED, COMPLETED, or CANCELLED".into(),
            ))
        })?;

    let request = SwapRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Swap request",
            id,
        }))?;

    let role = participant_role(&request, auth_user.id)?;
    let current = parse_status(&request)?;
    swap::authorize_transition(role, current, target)?;

    // `current` passed the authorization check, so it is exactly the guard
    // status the conditional UPDATE requires. `None` means another writer
    // moved the request between our read and this write.
    let updated = SwapRequestRepo::transition(&state.pool, id, target, current)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::InvalidState(format!(
                "Swap request is no longer {current}"
            )))
        })?;

    let detail = SwapRequestRepo::find_detail_by_id(&state.pool, updated.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Updated swap request vanished".into()))?;

    let message = format!(
        "Swap request {} successfully",
        target.as_str().to_lowercase()
    );
    Ok(Json(ApiResponse::with_message(detail, message)))
}

/// DELETE /api/v1/swaps/{id}
///
/// Remove a request entirely. Requester only; refused once ratings are
/// attached.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let request = SwapRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Swap request",
            id,
        }))?;

    if request.requester_id != auth_user.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the requester can delete the request".into(),
        )));
    }

    if RatingRepo::count_for_swap(&state.pool, id).await? > 0 {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot delete a swap request that has ratings".into(),
        )));
    }

    SwapRequestRepo::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse::new("Swap request deleted successfully")))
}

/// GET /api/v1/swaps/summary
///
/// Sent / received / overall counts by status for the caller's dashboard.
pub async fn summary(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<SwapSummary>>> {
    let summary = SwapRequestRepo::summary_for_user(&state.pool, auth_user.id).await?;
    Ok(Json(ApiResponse::new(summary)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Which side of the request the caller is on; non-participants are
/// rejected.
fn participant_role(request: &SwapRequest, user_id: DbId) -> Result<SwapRole, AppError> {
    if request.requester_id == user_id {
        Ok(SwapRole::Requester)
    } else if request.receiver_id == user_id {
        Ok(SwapRole::Receiver)
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Only participants can act on this swap request".into(),
        )))
    }
}

/// Parse the stored status column; an unknown value is a data bug, not a
/// client error.
fn parse_status(request: &SwapRequest) -> Result<SwapStatus, AppError> {
    SwapStatus::parse(&request.status).ok_or_else(|| {
        AppError::InternalError(format!(
            "Unknown swap status in database: {}",
            request.status
        ))
    })
}

/// Attach ratings to each swap in place, batch-loaded in one query.
async fn attach_ratings(pool: &DbPool, swaps: &mut [SwapRequestDetail]) -> AppResult<()> {
    if swaps.is_empty() {
        return Ok(());
    }

    let ids: Vec<DbId> = swaps.iter().map(|swap| swap.id).collect();
    let mut by_swap: HashMap<DbId, Vec<Rating>> = HashMap::new();
    for rating in RatingRepo::list_for_swaps(pool, &ids).await? {
        by_swap
            .entry(rating.swap_request_id)
            .or_default()
            .push(rating);
    }

    for swap in swaps {
        if let Some(ratings) = by_swap.remove(&swap.id) {
            swap.ratings = ratings;
        }
    }
    Ok(())
}
