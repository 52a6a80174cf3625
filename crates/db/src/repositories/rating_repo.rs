//! Repository for the `ratings` table.

use skillswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::rating::{CreateRating, Rating, RatingRaterRow, RatingWithRater};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, swap_request_id, rater_id, rated_id, rating, feedback, created_at";

/// Provides CRUD operations for swap ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert a rating, returning the created row.
    ///
    /// The `uq_ratings_swap_rater` constraint rejects a second rating
    /// from the same rater on the same swap.
    pub async fn create(pool: &PgPool, input: &CreateRating) -> Result<Rating, sqlx::Error> {
        let query = format!(
            "INSERT INTO ratings (swap_request_id, rater_id, rated_id, rating, feedback)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(input.swap_request_id)
            .bind(input.rater_id)
            .bind(input.rated_id)
            .bind(input.rating)
            .bind(&input.feedback)
            .fetch_one(pool)
            .await
    }

    /// Whether `rater_id` has already rated the given swap.
    pub async fn exists_for_swap_and_rater(
        pool: &PgPool,
        swap_request_id: DbId,
        rater_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM ratings WHERE swap_request_id = $1 AND rater_id = $2
             )",
        )
        .bind(swap_request_id)
        .bind(rater_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// All ratings attached to any of the given swaps, for embedding into
    /// swap detail responses.
    pub async fn list_for_swaps(
        pool: &PgPool,
        swap_request_ids: &[DbId],
    ) -> Result<Vec<Rating>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ratings
             WHERE swap_request_id = ANY($1)
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(swap_request_ids)
            .fetch_all(pool)
            .await
    }

    /// Ratings received by a user with the rater's public profile
    /// embedded, newest first.
    pub async fn list_received_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<RatingWithRater>, sqlx::Error> {
        let rows = sqlx::query_as::<_, RatingRaterRow>(
            "SELECT r.id, r.swap_request_id, r.rater_id, r.rated_id, r.rating, r.feedback,
                    r.created_at,
                    u.name AS rater_name, u.email AS rater_email,
                    u.profile_photo AS rater_profile_photo, u.location AS rater_location
             FROM ratings r
             JOIN users u ON u.id = r.rater_id
             WHERE r.rated_id = $1
             ORDER BY r.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Number of ratings attached to a swap.
    pub async fn count_for_swap(pool: &PgPool, swap_request_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM ratings WHERE swap_request_id = $1")
            .bind(swap_request_id)
            .fetch_one(pool)
            .await
    }
}
