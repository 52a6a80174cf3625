//! Handlers for the caller's skill listings (`/users/skills`).
//!
//! A listing ties a taxonomy skill to the caller's profile in one
//! direction (`OFFERED` or `WANTED`) at a proficiency level.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use skillswap_core::error::CoreError;
use skillswap_core::skill::{SkillLevel, SkillType};
use skillswap_core::types::DbId;
use skillswap_db::models::user_skill::{CreateUserSkill, UserSkillWithSkill};
use skillswap_db::repositories::{SkillRepo, UserSkillRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/skills`.
#[derive(Debug, Deserialize)]
pub struct CreateUserSkillRequest {
    #[serde(alias = "skillId")]
    pub skill_id: DbId,
    #[serde(alias = "skillType", alias = "type")]
    pub skill_type: String,
    pub level: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users/skills
pub async fn list_mine(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<Vec<UserSkillWithSkill>>>> {
    let rows = UserSkillRepo::list_for_user(&state.pool, auth_user.id).await?;
    Ok(Json(ApiResponse::new(
        rows.into_iter().map(Into::into).collect(),
    )))
}

/// POST /api/v1/users/skills
///
/// List a skill on the caller's profile. One listing per (skill,
/// direction); the same skill may appear once per direction.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateUserSkillRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserSkillWithSkill>>)> {
    let skill_type = SkillType::parse(&input.skill_type).ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "type must be OFFERED or WANTED".into(),
        ))
    })?;
    let level = SkillLevel::parse(&input.level).ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "level must be BEGINNER, INTERMEDIATE, ADVANCED, or EXPERT".into(),
        ))
    })?;

    // The skill row doubles as the embed in the response.
    let skill = SkillRepo::find_by_id(&state.pool, input.skill_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id: input.skill_id,
        }))?;

    if UserSkillRepo::exists(&state.pool, auth_user.id, skill.id, skill_type).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "You already have this skill in your profile".into(),
        )));
    }

    let row = UserSkillRepo::create(
        &state.pool,
        &CreateUserSkill {
            user_id: auth_user.id,
            skill_id: skill.id,
            skill_type,
            level,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(UserSkillWithSkill {
            id: row.id,
            user_id: row.user_id,
            skill_type: row.skill_type,
            level: row.level,
            created_at: row.created_at,
            skill,
        })),
    ))
}

/// DELETE /api/v1/users/skills/{id}
///
/// Remove one of the caller's listings. Listings referenced by a swap
/// request (on either side) cannot be removed.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let listing = UserSkillRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|listing| listing.user_id == auth_user.id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User skill",
            id,
        }))?;

    let references = UserSkillRepo::swap_reference_count(&state.pool, listing.id).await?;
    if references > 0 {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot remove a skill that is part of a swap request".into(),
        )));
    }

    UserSkillRepo::delete_for_user(&state.pool, listing.id, auth_user.id).await?;
    Ok(Json(MessageResponse::new("User skill deleted successfully")))
}
