//! Handlers for the `/skills` taxonomy resource.
//!
//! Skills are shared vocabulary, not owned by any user; listing them on a
//! profile happens through [`crate::handlers::user_skills`].

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use skillswap_core::error::CoreError;
use skillswap_db::models::skill::{CreateSkill, Skill, SkillFilter};
use skillswap_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /skills`. Both filters are substring matches.
#[derive(Debug, Deserialize)]
pub struct SkillListQuery {
    pub query: Option<String>,
    pub category: Option<String>,
}

/// Request body for `POST /skills`.
#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/skills
pub async fn list(
    State(state): State<AppState>,
    Query(input): Query<SkillListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Skill>>>> {
    let filter = SkillFilter {
        query: input.query,
        category: input.category,
    };
    let skills = SkillRepo::list(&state.pool, &filter).await?;
    Ok(Json(ApiResponse::new(skills)))
}

/// POST /api/v1/skills
///
/// Add a skill to the shared taxonomy. Names are unique.
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateSkillRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Skill>>)> {
    if input.name.trim().is_empty() || input.category.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name and category are required".into(),
        )));
    }

    if SkillRepo::find_by_name(&state.pool, &input.name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Skill already exists".into(),
        )));
    }

    let skill = SkillRepo::create(
        &state.pool,
        &CreateSkill {
            name: input.name,
            category: input.category,
            description: input.description,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            skill,
            "Skill created successfully",
        )),
    ))
}
