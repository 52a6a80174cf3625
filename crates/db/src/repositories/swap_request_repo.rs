//! Repository for the `swap_requests` table.
//!
//! Status changes go through [`SwapRequestRepo::transition`], a conditional
//! UPDATE guarded on the expected current status. Two concurrent writers
//! racing on the same request cannot both win: the loser's guard no longer
//! matches and it gets `None` back.

use skillswap_core::swap::SwapStatus;
use skillswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::swap_request::{
    CreateSwapRequest, SwapDirection, SwapListFilter, SwapRequest, SwapRequestDetail,
    SwapRequestDetailRow, SwapSummary, SwapSummaryRow,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, requester_id, receiver_id, skill_offered_id, skill_wanted_id, \
                       status, message, created_at, updated_at";

/// Joined column list embedding both parties' public profile fields.
const DETAIL_COLUMNS: &str = "\
    sr.id, sr.requester_id, sr.receiver_id, sr.skill_offered_id, sr.skill_wanted_id, \
    sr.status, sr.message, sr.created_at, sr.updated_at, \
    req.name AS requester_name, req.email AS requester_email, \
    req.profile_photo AS requester_profile_photo, req.location AS requester_location, \
    rcv.name AS receiver_name, rcv.email AS receiver_email, \
    rcv.profile_photo AS receiver_profile_photo, rcv.location AS receiver_location";

/// FROM clause matching [`DETAIL_COLUMNS`].
const DETAIL_FROM: &str = "\
    FROM swap_requests sr \
    JOIN users req ON req.id = sr.requester_id \
    JOIN users rcv ON rcv.id = sr.receiver_id";

/// Provides CRUD, lifecycle, and aggregate operations for swap requests.
pub struct SwapRequestRepo;

impl SwapRequestRepo {
    /// Insert a new request in `PENDING`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSwapRequest,
    ) -> Result<SwapRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO swap_requests
                (requester_id, receiver_id, skill_offered_id, skill_wanted_id, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SwapRequest>(&query)
            .bind(input.requester_id)
            .bind(input.receiver_id)
            .bind(input.skill_offered_id)
            .bind(input.skill_wanted_id)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a request by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SwapRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM swap_requests WHERE id = $1");
        sqlx::query_as::<_, SwapRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a request with both parties embedded.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SwapRequestDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} WHERE sr.id = $1");
        let row = sqlx::query_as::<_, SwapRequestDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Whether an open request already exists from `requester_id` to
    /// `receiver_id`.
    pub async fn has_pending_between(
        pool: &PgPool,
        requester_id: DbId,
        receiver_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM swap_requests
                WHERE requester_id = $1 AND receiver_id = $2 AND status = 'PENDING'
             )",
        )
        .bind(requester_id)
        .bind(receiver_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// List a user's requests (both parties embedded), newest first,
    /// optionally narrowed by direction and status.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        filter: &SwapListFilter,
    ) -> Result<Vec<SwapRequestDetail>, sqlx::Error> {
        let direction_clause = match filter.direction {
            Some(SwapDirection::Sent) => "sr.requester_id = $1",
            Some(SwapDirection::Received) => "sr.receiver_id = $1",
            None => "(sr.requester_id = $1 OR sr.receiver_id = $1)",
        };

        let rows = if let Some(status) = filter.status {
            let query = format!(
                "SELECT {DETAIL_COLUMNS} {DETAIL_FROM}
                 WHERE {direction_clause} AND sr.status = $2
                 ORDER BY sr.created_at DESC"
            );
            sqlx::query_as::<_, SwapRequestDetailRow>(&query)
                .bind(user_id)
                .bind(status.as_str())
                .fetch_all(pool)
                .await?
        } else {
            let query = format!(
                "SELECT {DETAIL_COLUMNS} {DETAIL_FROM}
                 WHERE {direction_clause}
                 ORDER BY sr.created_at DESC"
            );
            sqlx::query_as::<_, SwapRequestDetailRow>(&query)
                .bind(user_id)
                .fetch_all(pool)
                .await?
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Conditionally move a request to `target`.
    ///
    /// The UPDATE only applies while the row still holds
    /// `required_current`; `None` means the guard failed (the request
    /// moved or never existed) and nothing was written.
    pub async fn transition(
        pool: &PgPool,
        id: DbId,
        target: SwapStatus,
        required_current: SwapStatus,
    ) -> Result<Option<SwapRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE swap_requests
             SET status = $2, updated_at = NOW()
             WHERE id = $1 AND status = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SwapRequest>(&query)
            .bind(id)
            .bind(target.as_str())
            .bind(required_current.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a request. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM swap_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Per-direction and overall status counts for a user, in one query.
    pub async fn summary_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<SwapSummary, sqlx::Error> {
        let row = sqlx::query_as::<_, SwapSummaryRow>(
            "SELECT
                COUNT(*) FILTER (WHERE requester_id = $1) AS sent_total,
                COUNT(*) FILTER (WHERE requester_id = $1 AND status = 'PENDING') AS sent_pending,
                COUNT(*) FILTER (WHERE requester_id = $1 AND status = 'ACCEPTED') AS sent_accepted,
                COUNT(*) FILTER (WHERE requester_id = $1 AND status = 'COMPLETED') AS sent_completed,
                COUNT(*) FILTER (WHERE receiver_id = $1) AS received_total,
                COUNT(*) FILTER (WHERE receiver_id = $1 AND status = 'PENDING') AS received_pending,
                COUNT(*) FILTER (WHERE receiver_id = $1 AND status = 'ACCEPTED') AS received_accepted,
                COUNT(*) FILTER (WHERE receiver_id = $1 AND status = 'COMPLETED') AS received_completed
             FROM swap_requests
             WHERE requester_id = $1 OR receiver_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(row.into())
    }

    /// One page of a user's pending received requests (the notification
    /// feed), newest first, plus the total count.
    pub async fn pending_received_page(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<SwapRequestDetail>, i64), sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_FROM}
             WHERE sr.receiver_id = $1 AND sr.status = 'PENDING'
             ORDER BY sr.created_at DESC
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, SwapRequestDetailRow>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM swap_requests
             WHERE receiver_id = $1 AND status = 'PENDING'",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }
}
