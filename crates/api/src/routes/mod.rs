pub mod health;
pub mod projects;
pub mod skills;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contact, experience, projects as project_handlers};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /profile                       site owner profile (GET)
///
/// /projects                      filtered + sorted listing (GET)
/// /projects/featured             featured projects (GET)
/// /projects/{id}                 project detail (GET)
///
/// /gallery?url=                  gallery images for a live URL (GET)
///
/// /skills                        skills grouped by category (GET)
/// /skills/summary                headline skill numbers (GET)
///
/// /experience                    work history (GET)
/// /education                     degrees + certifications (GET)
///
/// /contact                       simulated contact submission (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(contact::get_profile))
        .nest("/projects", projects::router())
        .route("/gallery", get(project_handlers::gallery))
        .nest("/skills", skills::router())
        .route("/experience", get(experience::list_experience))
        .route("/education", get(experience::list_education))
        .route("/contact", post(contact::submit))
}
