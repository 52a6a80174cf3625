//! Handlers for the `/users` resource: search and public profiles.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use skillswap_core::error::CoreError;
use skillswap_core::pagination;
use skillswap_core::skill::SkillType;
use skillswap_core::types::DbId;
use skillswap_db::models::availability::Availability;
use skillswap_db::models::search::{RatingCounts, UserSearchParams, UserWithSkills};
use skillswap_db::models::user::{UpdateUser, User, UserResponse};
use skillswap_db::models::user_skill::UserSkillWithSkill;
use skillswap_db::repositories::{AvailabilityRepo, UserRepo, UserSkillRepo};
use skillswap_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{ApiResponse, Paginated};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /users`. All filters are optional and
/// combine with AND.
#[derive(Debug, Deserialize)]
pub struct UserSearchQuery {
    /// Substring match against name, email, or any listed skill name.
    pub query: Option<String>,
    /// Substring match against skill category.
    pub category: Option<String>,
    /// Restrict the skill filters to `OFFERED` or `WANTED` listings.
    #[serde(alias = "skillType")]
    pub skill_type: Option<String>,
    /// Substring match against profile location.
    pub location: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Request body for `PUT /users/{id}`. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "profilePhoto")]
    pub profile_photo: Option<String>,
    #[serde(alias = "isPublic")]
    pub is_public: Option<bool>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users
///
/// Search active, public users. Hits come back as full profiles with
/// skills, availability, and rating counts embedded, newest first.
pub async fn search(
    State(state): State<AppState>,
    Query(input): Query<UserSearchQuery>,
) -> AppResult<Json<ApiResponse<Paginated<UserWithSkills>>>> {
    let skill_type = match input.skill_type.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(SkillType::parse(raw).ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "skill_type must be OFFERED or WANTED".into(),
            ))
        })?),
    };

    let params = UserSearchParams {
        query: input.query,
        category: input.category,
        skill_type,
        location: input.location,
        page: pagination::clamp_page(input.page),
        limit: pagination::clamp_limit(input.limit),
    };

    let (users, total) = UserRepo::search(&state.pool, &params).await?;
    let profiles = build_profiles(&state.pool, users).await?;

    Ok(Json(ApiResponse::new(Paginated {
        data: profiles,
        total,
        page: params.page,
        limit: params.limit,
        total_pages: pagination::total_pages(total, params.limit),
    })))
}

/// GET /api/v1/users/{id}
///
/// Public profile with skills, availability, and rating counts embedded.
/// Deactivated accounts read as not found.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<UserWithSkills>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|user| user.is_active)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let mut profiles = build_profiles(&state.pool, vec![user]).await?;
    Ok(Json(ApiResponse::new(profiles.remove(0))))
}

/// PUT /api/v1/users/{id}
///
/// Update a profile. `{id}` must be the authenticated caller.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    if auth_user.id != id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Unauthorized to update this profile".into(),
        )));
    }

    let update = UpdateUser {
        name: input.name,
        location: input.location,
        profile_photo: input.profile_photo,
        is_public: input.is_public,
    };

    let user = UserRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(ApiResponse::with_message(
        user.into(),
        "Profile updated successfully",
    )))
}

// ---------------------------------------------------------------------------
// Profile assembly
// ---------------------------------------------------------------------------

/// Assemble full profiles for a page of users with three batch queries
/// (listings, availability, rating counts) instead of per-user round trips.
pub(crate) async fn build_profiles(
    pool: &DbPool,
    users: Vec<User>,
) -> AppResult<Vec<UserWithSkills>> {
    let ids: Vec<DbId> = users.iter().map(|user| user.id).collect();

    let mut skills_by_user: HashMap<DbId, Vec<UserSkillWithSkill>> = HashMap::new();
    for row in UserSkillRepo::list_for_users(pool, &ids).await? {
        skills_by_user
            .entry(row.user_id)
            .or_default()
            .push(row.into());
    }

    let mut slots_by_user: HashMap<DbId, Vec<Availability>> = HashMap::new();
    for slot in AvailabilityRepo::list_for_users(pool, &ids).await? {
        slots_by_user.entry(slot.user_id).or_default().push(slot);
    }

    let counts: HashMap<DbId, RatingCounts> = UserRepo::rating_counts(pool, &ids)
        .await?
        .into_iter()
        .map(|counts| (counts.user_id, counts))
        .collect();

    Ok(users
        .into_iter()
        .map(|user| {
            let id = user.id;
            let rating_counts = counts.get(&id).copied().unwrap_or_default();
            UserWithSkills {
                user: user.into(),
                skills: skills_by_user.remove(&id).unwrap_or_default(),
                availability: slots_by_user.remove(&id).unwrap_or_default(),
                ratings_given: rating_counts.given,
                ratings_received: rating_counts.received,
            }
        })
        .collect())
}
