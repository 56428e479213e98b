//! Handlers for the profile and the contact form.
//!
//! Contact submissions are validated and then "delivered" after a fixed
//! delay. Nothing is stored or forwarded.

use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::contact::ContactMessage;
use folio_core::error::CoreError;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub status: &'static str,
}

/// GET /api/v1/profile
pub async fn get_profile(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = state.store.profile().ok_or(CoreError::NotFound {
        entity: "Profile",
        id: "personal".to_string(),
    })?;

    Ok(Json(DataResponse { data: profile }).into_response())
}

/// POST /api/v1/contact
///
/// Returns 202 once the simulated delivery delay has elapsed.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(message) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    message.check()?;

    tokio::time::sleep(Duration::from_millis(state.config.contact_delay_ms)).await;

    tracing::info!(
        subject = %message.subject,
        message_len = message.message.len(),
        "Contact message accepted (simulated delivery)",
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse {
            data: ContactReceipt { status: "sent" },
        }),
    ))
}
