//! Repository for the `users` table.

use skillswap_core::pagination;
use skillswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::search::{RatingCounts, UserSearchParams};
use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, name, location, profile_photo, \
                       is_public, is_active, created_at, updated_at";

/// Provides CRUD and search operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, name, location)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.name)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Update a user's profile. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                profile_photo = COALESCE($4, profile_photo),
                is_public = COALESCE($5, is_public),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.profile_photo)
            .bind(input.is_public)
            .fetch_optional(pool)
            .await
    }

    /// Flip a user's `is_active` flag. Returns `true` if the row changed.
    pub async fn set_active(pool: &PgPool, id: DbId, active: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET is_active = $2, updated_at = NOW()
             WHERE id = $1 AND is_active <> $2",
        )
        .bind(id)
        .bind(active)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Search active, public users with the given filters.
    ///
    /// Returns one page of rows (newest first) plus the total match count.
    /// Filter composition:
    ///
    /// - `location` narrows by profile location (substring)
    /// - `query` matches name, email, or any listed skill name (substring)
    /// - `category` / `skill_type` narrow to users with at least one
    ///   listing satisfying both (when both are given) or either alone
    pub async fn search(
        pool: &PgPool,
        params: &UserSearchParams,
    ) -> Result<(Vec<User>, i64), sqlx::Error> {
        let mut conditions = vec!["is_active = TRUE".to_string(), "is_public = TRUE".to_string()];
        // All filter binds are text; LIMIT/OFFSET are appended after them.
        let mut binds: Vec<String> = Vec::new();

        if let Some(location) = non_empty(params.location.as_deref()) {
            binds.push(format!("%{location}%"));
            conditions.push(format!("location ILIKE ${}", binds.len()));
        }

        if let Some(query) = non_empty(params.query.as_deref()) {
            binds.push(format!("%{query}%"));
            let idx = binds.len();
            conditions.push(format!(
                "(name ILIKE ${idx} OR email ILIKE ${idx} OR EXISTS (\
                    SELECT 1 FROM user_skills us \
                    JOIN skills s ON s.id = us.skill_id \
                    WHERE us.user_id = users.id AND s.name ILIKE ${idx}))"
            ));
        }

        let category = non_empty(params.category.as_deref());
        match (category, params.skill_type) {
            (Some(category), Some(skill_type)) => {
                binds.push(skill_type.as_str().to_string());
                let type_idx = binds.len();
                binds.push(format!("%{category}%"));
                let cat_idx = binds.len();
                conditions.push(format!(
                    "EXISTS (SELECT 1 FROM user_skills us \
                     JOIN skills s ON s.id = us.skill_id \
                     WHERE us.user_id = users.id \
                       AND us.skill_type = ${type_idx} \
                       AND s.category ILIKE ${cat_idx})"
                ));
            }
            (Some(category), None) => {
                binds.push(format!("%{category}%"));
                let cat_idx = binds.len();
                conditions.push(format!(
                    "EXISTS (SELECT 1 FROM user_skills us \
                     JOIN skills s ON s.id = us.skill_id \
                     WHERE us.user_id = users.id AND s.category ILIKE ${cat_idx})"
                ));
            }
            (None, Some(skill_type)) => {
                binds.push(skill_type.as_str().to_string());
                let type_idx = binds.len();
                conditions.push(format!(
                    "EXISTS (SELECT 1 FROM user_skills us \
                     WHERE us.user_id = users.id AND us.skill_type = ${type_idx})"
                ));
            }
            (None, None) => {}
        }

        let where_clause = conditions.join(" AND ");

        let count_sql = format!("SELECT COUNT(*) FROM users WHERE {where_clause}");
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for bind in &binds {
            count_query = count_query.bind(bind);
        }
        let total = count_query.fetch_one(pool).await?;

        let list_sql = format!(
            "SELECT {COLUMNS} FROM users WHERE {where_clause} \
             ORDER BY created_at DESC LIMIT ${} OFFSET ${}",
            binds.len() + 1,
            binds.len() + 2
        );
        let mut list_query = sqlx::query_as::<_, User>(&list_sql);
        for bind in &binds {
            list_query = list_query.bind(bind);
        }
        let users = list_query
            .bind(params.limit)
            .bind(pagination::offset(params.page, params.limit))
            .fetch_all(pool)
            .await?;

        Ok((users, total))
    }

    /// Given/received rating counts for a batch of users (one row each).
    pub async fn rating_counts(
        pool: &PgPool,
        user_ids: &[DbId],
    ) -> Result<Vec<RatingCounts>, sqlx::Error> {
        sqlx::query_as::<_, RatingCounts>(
            "SELECT u.id AS user_id,
                    (SELECT COUNT(*) FROM ratings r WHERE r.rater_id = u.id) AS given,
                    (SELECT COUNT(*) FROM ratings r WHERE r.rated_id = u.id) AS received
             FROM users u
             WHERE u.id = ANY($1)",
        )
        .bind(user_ids)
        .fetch_all(pool)
        .await
    }
}

/// Treat empty / whitespace-only filter values as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
