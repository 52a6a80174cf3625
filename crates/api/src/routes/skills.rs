//! Route definitions for the `/skills` taxonomy resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// ```text
/// GET  /  -> list (public)
/// POST /  -> create (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(skills::list).post(skills::create))
}
