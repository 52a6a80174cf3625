//! Skill taxonomy entity model and DTOs.

use serde::Serialize;
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A skill in the shared taxonomy. Unique by name; not owned by any user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new skill.
#[derive(Debug)]
pub struct CreateSkill {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
}

/// Filters for listing the taxonomy. Both are substring matches.
#[derive(Debug, Default)]
pub struct SkillFilter {
    /// Matches against skill name or description.
    pub query: Option<String>,
    pub category: Option<String>,
}
