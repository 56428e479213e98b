//! Handlers for the `/skills` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::grouping::group_skills_by_category;
use folio_core::skill::{SkillCategory, SkillRecord};
use folio_core::stats::SkillSummary;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One category of the skills page, strongest skills first.
#[derive(Debug, Serialize)]
pub struct SkillGroup<'a> {
    pub category: SkillCategory,
    pub skills: Vec<&'a SkillRecord>,
}

/// GET /api/v1/skills
///
/// Skills grouped by category in first-seen order.
pub async fn list_grouped(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let groups: Vec<SkillGroup<'_>> = group_skills_by_category(state.store.skills())
        .into_iter()
        .map(|(category, skills)| SkillGroup { category, skills })
        .collect();

    Ok(Json(DataResponse { data: groups }).into_response())
}

/// GET /api/v1/skills/summary
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = SkillSummary::from_skills(state.store.skills());
    Ok(Json(DataResponse { data: summary }))
}
