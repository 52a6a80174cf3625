//! Swap request entity model, detail projections, and DTOs.

use serde::Serialize;
use skillswap_core::swap::SwapStatus;
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::rating::Rating;
use crate::models::user::UserSummary;

/// Raw row from the `swap_requests` table.
///
/// `status` holds the canonical upper-case form; parse with
/// `SwapStatus::parse` when the enum is needed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SwapRequest {
    pub id: DbId,
    pub requester_id: DbId,
    pub receiver_id: DbId,
    pub skill_offered_id: DbId,
    pub skill_wanted_id: DbId,
    pub status: String,
    pub message: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat join of a swap request with both parties' public profile columns.
#[derive(Debug, Clone, FromRow)]
pub struct SwapRequestDetailRow {
    pub id: DbId,
    pub requester_id: DbId,
    pub receiver_id: DbId,
    pub skill_offered_id: DbId,
    pub skill_wanted_id: DbId,
    pub status: String,
    pub message: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub requester_name: Option<String>,
    pub requester_email: String,
    pub requester_profile_photo: Option<String>,
    pub requester_location: Option<String>,
    pub receiver_name: Option<String>,
    pub receiver_email: String,
    pub receiver_profile_photo: Option<String>,
    pub receiver_location: Option<String>,
}

/// A swap request with both parties embedded, as returned by the API.
///
/// `ratings` starts empty; handlers attach them for completed swaps via
/// the rating repository.
#[derive(Debug, Clone, Serialize)]
pub struct SwapRequestDetail {
    pub id: DbId,
    pub requester_id: DbId,
    pub receiver_id: DbId,
    pub skill_offered_id: DbId,
    pub skill_wanted_id: DbId,
    pub status: String,
    pub message: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub requester: UserSummary,
    pub receiver: UserSummary,
    pub ratings: Vec<Rating>,
}

impl From<SwapRequestDetailRow> for SwapRequestDetail {
    fn from(row: SwapRequestDetailRow) -> Self {
        SwapRequestDetail {
            id: row.id,
            requester_id: row.requester_id,
            receiver_id: row.receiver_id,
            skill_offered_id: row.skill_offered_id,
            skill_wanted_id: row.skill_wanted_id,
            status: row.status,
            message: row.message,
            created_at: row.created_at,
            updated_at: row.updated_at,
            requester: UserSummary {
                id: row.requester_id,
                name: row.requester_name,
                email: row.requester_email,
                profile_photo: row.requester_profile_photo,
                location: row.requester_location,
            },
            receiver: UserSummary {
                id: row.receiver_id,
                name: row.receiver_name,
                email: row.receiver_email,
                profile_photo: row.receiver_profile_photo,
                location: row.receiver_location,
            },
            ratings: Vec::new(),
        }
    }
}

/// DTO for creating a swap request. Party and listing checks happen
/// upstream; the row starts in `PENDING`.
#[derive(Debug)]
pub struct CreateSwapRequest {
    pub requester_id: DbId,
    pub receiver_id: DbId,
    pub skill_offered_id: DbId,
    pub skill_wanted_id: DbId,
    pub message: Option<String>,
}

/// Which side of their swaps a user wants to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    Sent,
    Received,
}

/// Filters for a user's swap list. `None` direction means both sides.
#[derive(Debug, Default)]
pub struct SwapListFilter {
    pub direction: Option<SwapDirection>,
    pub status: Option<SwapStatus>,
}

/// Per-direction status counts in the swap summary.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SwapCounts {
    pub total: i64,
    pub pending: i64,
    pub accepted: i64,
    pub completed: i64,
}

/// Aggregated swap counts for a user's dashboard.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SwapSummary {
    pub sent: SwapCounts,
    pub received: SwapCounts,
    pub overall: SwapCounts,
}

/// Flat aggregate row behind [`SwapSummary`], computed in one query.
#[derive(Debug, FromRow)]
pub struct SwapSummaryRow {
    pub sent_total: i64,
    pub sent_pending: i64,
    pub sent_accepted: i64,
    pub sent_completed: i64,
    pub received_total: i64,
    pub received_pending: i64,
    pub received_accepted: i64,
    pub received_completed: i64,
}

impl From<SwapSummaryRow> for SwapSummary {
    fn from(row: SwapSummaryRow) -> Self {
        SwapSummary {
            sent: SwapCounts {
                total: row.sent_total,
                pending: row.sent_pending,
                accepted: row.sent_accepted,
                completed: row.sent_completed,
            },
            received: SwapCounts {
                total: row.received_total,
                pending: row.received_pending,
                accepted: row.received_accepted,
                completed: row.received_completed,
            },
            overall: SwapCounts {
                total: row.sent_total + row.received_total,
                pending: row.sent_pending + row.received_pending,
                accepted: row.sent_accepted + row.received_accepted,
                completed: row.sent_completed + row.received_completed,
            },
        }
    }
}
