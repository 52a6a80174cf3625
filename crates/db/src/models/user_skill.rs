//! Per-user skill listing model and DTOs.

use serde::Serialize;
use skillswap_core::skill::{SkillLevel, SkillType};
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::skill::Skill;

/// Raw row from the `user_skills` table.
///
/// `skill_type` and `level` hold the canonical upper-case forms; parse with
/// `SkillType::parse` / `SkillLevel::parse` when the enum is needed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSkill {
    pub id: DbId,
    pub user_id: DbId,
    pub skill_id: DbId,
    pub skill_type: String,
    pub level: String,
    pub created_at: Timestamp,
}

/// Flat join of a listing with its skill, aliased `skill_*` columns.
#[derive(Debug, Clone, FromRow)]
pub struct UserSkillSkillRow {
    pub id: DbId,
    pub user_id: DbId,
    pub skill_id: DbId,
    pub skill_type: String,
    pub level: String,
    pub created_at: Timestamp,
    pub skill_name: String,
    pub skill_category: String,
    pub skill_description: Option<String>,
    pub skill_created_at: Timestamp,
}

/// A listing with its skill embedded, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct UserSkillWithSkill {
    pub id: DbId,
    pub user_id: DbId,
    pub skill_type: String,
    pub level: String,
    pub created_at: Timestamp,
    pub skill: Skill,
}

impl From<UserSkillSkillRow> for UserSkillWithSkill {
    fn from(row: UserSkillSkillRow) -> Self {
        UserSkillWithSkill {
            id: row.id,
            user_id: row.user_id,
            skill_type: row.skill_type,
            level: row.level,
            created_at: row.created_at,
            skill: Skill {
                id: row.skill_id,
                name: row.skill_name,
                category: row.skill_category,
                description: row.skill_description,
                created_at: row.skill_created_at,
            },
        }
    }
}

/// DTO for creating a skill listing. The enums are validated upstream.
#[derive(Debug)]
pub struct CreateUserSkill {
    pub user_id: DbId,
    pub skill_id: DbId,
    pub skill_type: SkillType,
    pub level: SkillLevel,
}
