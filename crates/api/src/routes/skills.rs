//! Route definitions for the `/skills` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// ```text
/// GET    /            -> list_grouped
/// GET    /summary     -> summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list_grouped))
        .route("/summary", get(skills::summary))
}
