//! Handlers for the `/projects` resource and the gallery lookup.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::filter::{CategoryFilter, ProjectFilter};
use folio_core::gallery::resolve_gallery;
use folio_core::project::{ProjectRecord, CARD_TAG_LIMIT};
use folio_core::sort::{query_projects, ProjectQuery, SortKey};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{GalleryParams, ProjectListParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

/// A project as shown on a listing card: the record plus its truncated tags.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard<'a> {
    #[serde(flatten)]
    pub project: &'a ProjectRecord,
    pub visible_technologies: &'a [String],
    pub hidden_technologies: usize,
}

impl<'a> From<&'a ProjectRecord> for ProjectCard<'a> {
    fn from(project: &'a ProjectRecord) -> Self {
        let tags = project.display_tags(CARD_TAG_LIMIT);
        Self {
            project,
            visible_technologies: tags.shown,
            hidden_technologies: tags.hidden,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectListing<'a> {
    pub category: String,
    pub sort: SortKey,
    pub query: String,
    pub total: usize,
    pub projects: Vec<ProjectCard<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail<'a> {
    #[serde(flatten)]
    pub project: &'a ProjectRecord,
    pub ongoing: bool,
    pub duration_months: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct GalleryResponse<'a> {
    pub url: String,
    pub images: &'a [String],
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// GET /api/v1/projects
///
/// Filter by `category` (default `all`) and free text `q`, ordered by `sort`
/// (default `date`). An empty list is a normal response.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<impl IntoResponse> {
    let category: CategoryFilter = match params.category.as_deref() {
        Some(raw) => raw.parse()?,
        None => CategoryFilter::All,
    };
    let sort: SortKey = match params.sort.as_deref() {
        Some(raw) => raw.parse()?,
        None => SortKey::default(),
    };
    let query = ProjectQuery {
        filter: ProjectFilter::new(category, params.q.unwrap_or_default()),
        sort,
    };

    let projects: Vec<ProjectCard<'_>> = query_projects(state.store.projects(), &query)
        .into_iter()
        .map(ProjectCard::from)
        .collect();

    tracing::debug!(
        category = %category,
        query = %query.filter.text,
        sort = %sort,
        results = projects.len(),
        "Projects queried",
    );

    let listing = ProjectListing {
        category: category.to_string(),
        sort,
        query: query.filter.text.clone(),
        total: projects.len(),
        projects,
    };
    Ok(Json(DataResponse { data: listing }).into_response())
}

/// GET /api/v1/projects/featured
pub async fn featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects: Vec<ProjectCard<'_>> = state
        .store
        .featured_projects()
        .into_iter()
        .map(ProjectCard::from)
        .collect();

    Ok(Json(DataResponse { data: projects }).into_response())
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = state.store.project(&id)?;

    let detail = ProjectDetail {
        project,
        ongoing: project.is_ongoing(),
        duration_months: project.duration_months(),
    };
    Ok(Json(DataResponse { data: detail }).into_response())
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

/// GET /api/v1/gallery?url=
///
/// Gallery images for the project deployed at `url`. Unknown URLs answer with
/// an empty list, not an error.
pub async fn gallery(
    State(state): State<AppState>,
    params: Result<Query<GalleryParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let images = resolve_gallery(state.store.projects(), &params.url);

    Ok(Json(DataResponse {
        data: GalleryResponse {
            url: params.url,
            images,
        },
    })
    .into_response())
}
