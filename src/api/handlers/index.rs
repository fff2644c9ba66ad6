//! Service status, object statistics and the JSON 404 fallback.

use axum::{Json, extract::State};

use crate::api::dto::index::{StatsResponse, StatusResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /status`
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse { status: "OK" })
}

/// Counts stored objects per class.
///
/// # Endpoint
///
/// `GET /stats`
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let counts = state.stats_service.counts().await?;

    Ok(Json(counts.into()))
}

/// Answers unknown routes with `404 {"error": "Not found"}`.
pub async fn not_found_handler() -> AppError {
    AppError::not_found()
}
