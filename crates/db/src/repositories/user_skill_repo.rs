//! Repository for the `user_skills` table (per-user skill listings).

use skillswap_core::skill::SkillType;
use skillswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_skill::{CreateUserSkill, UserSkill, UserSkillSkillRow, UserSkillWithSkill};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, skill_id, skill_type, level, created_at";

/// Joined column list for listing-with-skill queries.
const JOINED_COLUMNS: &str = "\
    us.id, us.user_id, us.skill_id, us.skill_type, us.level, us.created_at, \
    s.name AS skill_name, s.category AS skill_category, \
    s.description AS skill_description, s.created_at AS skill_created_at";

/// Provides CRUD operations for skill listings.
pub struct UserSkillRepo;

impl UserSkillRepo {
    /// Insert a new listing, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUserSkill) -> Result<UserSkill, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_skills (user_id, skill_id, skill_type, level)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSkill>(&query)
            .bind(input.user_id)
            .bind(input.skill_id)
            .bind(input.skill_type.as_str())
            .bind(input.level.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a listing by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserSkill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_skills WHERE id = $1");
        sqlx::query_as::<_, UserSkill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether the user already lists this skill in this direction.
    pub async fn exists(
        pool: &PgPool,
        user_id: DbId,
        skill_id: DbId,
        skill_type: SkillType,
    ) -> Result<bool, sqlx::Error> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM user_skills
                WHERE user_id = $1 AND skill_id = $2 AND skill_type = $3
             )",
        )
        .bind(user_id)
        .bind(skill_id)
        .bind(skill_type.as_str())
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// List one user's listings with skills embedded, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserSkillWithSkill>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM user_skills us
             JOIN skills s ON s.id = us.skill_id
             WHERE us.user_id = $1
             ORDER BY us.created_at DESC"
        );
        let rows = sqlx::query_as::<_, UserSkillSkillRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Batch variant of [`Self::list_for_user`] for a page of users.
    pub async fn list_for_users(
        pool: &PgPool,
        user_ids: &[DbId],
    ) -> Result<Vec<UserSkillWithSkill>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM user_skills us
             JOIN skills s ON s.id = us.skill_id
             WHERE us.user_id = ANY($1)
             ORDER BY us.created_at DESC"
        );
        let rows = sqlx::query_as::<_, UserSkillSkillRow>(&query)
            .bind(user_ids)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Number of swap requests referencing a listing on either side.
    ///
    /// Used to refuse listing deletion while swaps point at it.
    pub async fn swap_reference_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM swap_requests
             WHERE skill_offered_id = $1 OR skill_wanted_id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Delete a listing owned by `user_id`. Returns `true` if a row was
    /// deleted; `false` covers both "no such listing" and "not yours".
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_skills WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
