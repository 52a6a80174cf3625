//! Route definitions for the `/users` resource.
//!
//! Covers public search and profiles plus the caller-scoped skill listing
//! and availability sub-resources. The static `/skills` and
//! `/availability` segments take priority over the `/{id}` matchers.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{availability, ratings, user_skills, users};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                   -> search (public)
/// GET    /skills             -> caller's listings
/// POST   /skills             -> add listing
/// DELETE /skills/{id}        -> remove listing
/// GET    /availability       -> caller's slots
/// POST   /availability       -> add slot
/// DELETE /availability/{id}  -> remove slot
/// GET    /{id}               -> public profile
/// PUT    /{id}               -> update own profile
/// GET    /{id}/ratings       -> received ratings (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::search))
        // Caller-scoped skill listings.
        .route(
            "/skills",
            get(user_skills::list_mine).post(user_skills::create),
        )
        .route("/skills/{id}", delete(user_skills::delete))
        // Caller-scoped availability.
        .route(
            "/availability",
            get(availability::list_mine).post(availability::create),
        )
        .route("/availability/{id}", delete(availability::delete))
        // Public profiles.
        .route("/{id}", get(users::get_by_id).put(users::update))
        .route("/{id}/ratings", get(ratings::list_received))
}
