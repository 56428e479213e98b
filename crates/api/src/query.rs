//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the project listing (`?category=&q=&sort=`).
///
/// Values are kept as raw strings and parsed in the handler so an unknown
/// category or sort key becomes a `VALIDATION_ERROR` response.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
}

/// Query parameters for gallery resolution (`?url=`).
#[derive(Debug, Deserialize)]
pub struct GalleryParams {
    pub url: String,
}
