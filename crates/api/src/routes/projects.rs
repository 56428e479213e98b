//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /            -> list        (?category=&q=&sort=)
/// GET    /featured    -> featured
/// GET    /{id}        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list))
        .route("/featured", get(projects::featured))
        .route("/{id}", get(projects::get_by_id))
}
