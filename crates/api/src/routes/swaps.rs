//! Route definitions for the `/swaps` resource. All require auth.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{ratings, swaps};
use crate::state::AppState;

/// Routes mounted at `/swaps`.
///
/// ```text
/// GET    /              -> list (?type=sent|received&status=)
/// POST   /              -> create
/// GET    /summary       -> status counts
/// PUT    /{id}          -> transition
/// DELETE /{id}          -> delete
/// POST   /{id}/ratings  -> rate a completed swap
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(swaps::list).post(swaps::create))
        .route("/summary", get(swaps::summary))
        .route("/{id}", put(swaps::transition).delete(swaps::delete))
        .route("/{id}/ratings", post(ratings::create))
}
