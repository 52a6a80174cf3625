//! Weekly availability slot model and DTOs.

use chrono::NaiveTime;
use serde::Serialize;
use skillswap_core::availability::DayOfWeek;
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An availability slot row. `day_of_week` holds the canonical upper-case
/// day name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Availability {
    pub id: DbId,
    pub user_id: DbId,
    pub day_of_week: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: Timestamp,
}

/// DTO for creating an availability slot. Day and time range are validated
/// upstream.
#[derive(Debug)]
pub struct CreateAvailability {
    pub user_id: DbId,
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
