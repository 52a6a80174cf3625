pub mod auth;
pub mod health;
pub mod notifications;
pub mod skills;
pub mod swaps;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                register (public)
/// /auth/login                   login (public)
/// /auth/me                      current profile (requires auth)
///
/// /users                        search active public users (public)
/// /users/{id}                   get profile (public), update (self only)
/// /users/{id}/ratings           received ratings (public)
/// /users/skills                 caller's listings: list, create
/// /users/skills/{id}            remove listing (DELETE)
/// /users/availability           caller's slots: list, create
/// /users/availability/{id}      remove slot (DELETE)
///
/// /skills                       taxonomy: list (public), create (auth)
///
/// /swaps                        list, create (requires auth)
/// /swaps/summary                status counts (requires auth)
/// /swaps/{id}                   transition (PUT), delete
/// /swaps/{id}/ratings           rate a completed swap (POST)
///
/// /notifications                pending received requests (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication and the caller's profile.
        .nest("/auth", auth::router())
        // User search, public profiles, listings, availability.
        .nest("/users", users::router())
        // Shared skill taxonomy.
        .nest("/skills", skills::router())
        // Swap request lifecycle, summary, ratings.
        .nest("/swaps", swaps::router())
        // Pending-request notification feed.
        .nest("/notifications", notifications::router())
}
