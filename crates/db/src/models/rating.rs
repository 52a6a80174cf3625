//! Post-swap rating model and DTOs.

use serde::Serialize;
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::user::UserSummary;

/// A rating left by one participant of a completed swap for the other.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub swap_request_id: DbId,
    pub rater_id: DbId,
    pub rated_id: DbId,
    pub rating: i32,
    pub feedback: Option<String>,
    pub created_at: Timestamp,
}

/// Flat join of a rating with the rater's public profile columns.
#[derive(Debug, Clone, FromRow)]
pub struct RatingRaterRow {
    pub id: DbId,
    pub swap_request_id: DbId,
    pub rater_id: DbId,
    pub rated_id: DbId,
    pub rating: i32,
    pub feedback: Option<String>,
    pub created_at: Timestamp,
    pub rater_name: Option<String>,
    pub rater_email: String,
    pub rater_profile_photo: Option<String>,
    pub rater_location: Option<String>,
}

/// A received rating with the rater embedded, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct RatingWithRater {
    pub id: DbId,
    pub swap_request_id: DbId,
    pub rater_id: DbId,
    pub rated_id: DbId,
    pub rating: i32,
    pub feedback: Option<String>,
    pub created_at: Timestamp,
    pub rater: UserSummary,
}

impl From<RatingRaterRow> for RatingWithRater {
    fn from(row: RatingRaterRow) -> Self {
        RatingWithRater {
            id: row.id,
            swap_request_id: row.swap_request_id,
            rater_id: row.rater_id,
            rated_id: row.rated_id,
            rating: row.rating,
            feedback: row.feedback,
            created_at: row.created_at,
            rater: UserSummary {
                id: row.rater_id,
                name: row.rater_name,
                email: row.rater_email,
                profile_photo: row.rater_profile_photo,
                location: row.rater_location,
            },
        }
    }
}

/// DTO for creating a rating. Score bounds and participant checks happen
/// upstream.
#[derive(Debug)]
pub struct CreateRating {
    pub swap_request_id: DbId,
    pub rater_id: DbId,
    pub rated_id: DbId,
    pub rating: i32,
    pub feedback: Option<String>,
}
