//! User search parameters and result shape.

use serde::Serialize;
use skillswap_core::skill::SkillType;
use skillswap_core::types::DbId;

use crate::models::availability::Availability;
use crate::models::user::UserResponse;
use crate::models::user_skill::UserSkillWithSkill;

/// Typed, already-validated search parameters.
///
/// Only active, public users are ever searched; these filters narrow
/// further. `page` and `limit` are pre-clamped by the caller.
#[derive(Debug)]
pub struct UserSearchParams {
    /// Substring match against user name, email, or any listed skill name.
    pub query: Option<String>,
    /// Substring match against skill category.
    pub category: Option<String>,
    /// Restrict the category/skill filter to one listing direction.
    pub skill_type: Option<SkillType>,
    /// Substring match against user location.
    pub location: Option<String>,
    pub page: i64,
    pub limit: i64,
}

/// A search hit: public profile plus embedded listings, availability, and
/// rating counts.
#[derive(Debug, Serialize)]
pub struct UserWithSkills {
    #[serde(flatten)]
    pub user: UserResponse,
    pub skills: Vec<UserSkillWithSkill>,
    pub availability: Vec<Availability>,
    pub ratings_given: i64,
    pub ratings_received: i64,
}

/// Per-user rating counts, batch-loaded for a page of search hits.
#[derive(Debug, Clone, Copy, Default, sqlx::FromRow)]
pub struct RatingCounts {
    pub user_id: DbId,
    pub given: i64,
    pub received: i64,
}
