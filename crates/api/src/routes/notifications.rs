//! Route definitions for the notification feed.

use axum::routing::get;
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET /  -> pending received requests (requires auth; ?page=&limit=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(notifications::list))
}
