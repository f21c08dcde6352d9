//! Axum handlers for the assignment routes.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::api;
use crate::error::ApiError;
use crate::models::{Assignment, AssignmentSummary};
use crate::protocol::SubmissionResult;

use super::state::AppState;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Unavailable(cause) = &self {
            tracing::error!(%cause, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let status =
            StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body())).into_response()
    }
}

pub async fn list_assignments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssignmentSummary>>, ApiError> {
    Ok(Json(api::list_assignments(&state.store).await?))
}

pub async fn get_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Assignment>, ApiError> {
    Ok(Json(api::get_assignment(&state.store, &id).await?))
}

/// The body is taken as raw bytes so that shape errors map onto 400
/// responses with the usual `{"error": ...}` body.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SubmissionResult>, ApiError> {
    let body: Value = serde_json::from_slice(&body)
        .map_err(|err| ApiError::BadRequest(format!("invalid JSON body: {}", err)))?;

    Ok(Json(api::submit(&state.store, &id, &body).await?))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
