//! Repository for the `availability` table.

use skillswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::availability::{Availability, CreateAvailability};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, day_of_week, start_time, end_time, created_at";

/// Provides CRUD operations for weekly availability slots.
pub struct AvailabilityRepo;

impl AvailabilityRepo {
    /// Insert a new slot, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAvailability,
    ) -> Result<Availability, sqlx::Error> {
        let query = format!(
            "INSERT INTO availability (user_id, day_of_week, start_time, end_time)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Availability>(&query)
            .bind(input.user_id)
            .bind(input.day_of_week.as_str())
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(pool)
            .await
    }

    /// List one user's slots in week order, then by start time.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Availability>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM availability
             WHERE user_id = $1
             ORDER BY ARRAY_POSITION(
                 ARRAY['MONDAY','TUESDAY','WEDNESDAY','THURSDAY','FRIDAY','SATURDAY','SUNDAY'],
                 day_of_week
             ), start_time"
        );
        sqlx::query_as::<_, Availability>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Batch variant of [`Self::list_for_user`] for a page of users.
    pub async fn list_for_users(
        pool: &PgPool,
        user_ids: &[DbId],
    ) -> Result<Vec<Availability>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM availability
             WHERE user_id = ANY($1)
             ORDER BY user_id, start_time"
        );
        sqlx::query_as::<_, Availability>(&query)
            .bind(user_ids)
            .fetch_all(pool)
            .await
    }

    /// Delete a slot owned by `user_id`. Returns `true` if a row was
    /// deleted; `false` covers both "no such slot" and "not yours".
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM availability WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
