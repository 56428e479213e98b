//! Handlers for experience and education timelines.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::education::{Certification, Degree};
use folio_core::experience::ExperienceRecord;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry<'a> {
    #[serde(flatten)]
    pub record: &'a ExperienceRecord,
    /// Years in the position, up to today while it is still held.
    pub years: f64,
}

#[derive(Debug, Serialize)]
pub struct EducationOverview<'a> {
    pub degrees: Vec<&'a Degree>,
    pub certifications: Vec<&'a Certification>,
}

/// GET /api/v1/experience
pub async fn list_experience(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();

    let entries: Vec<ExperienceEntry<'_>> = state
        .store
        .experience()
        .iter()
        .map(|record| ExperienceEntry {
            record,
            years: record.years(today),
        })
        .collect();

    Ok(Json(DataResponse { data: entries }).into_response())
}

/// GET /api/v1/education
///
/// Degrees and certifications split into separate lists, dataset order kept.
pub async fn list_education(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let overview = EducationOverview {
        degrees: state.store.degrees().collect(),
        certifications: state.store.certifications().collect(),
    };

    Ok(Json(DataResponse { data: overview }).into_response())
}
