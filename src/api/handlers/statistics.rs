//! Handler for single-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::statistics::StatisticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns statistics for a short link.
///
/// # Endpoint
///
/// `GET /api/statistics/{slug}`
///
/// Reading statistics never counts as a visit. Expired links are reported
/// with `status.isExpired = true`.
///
/// # Errors
///
/// Returns 404 Not Found if the slug is unknown.
pub async fn statistics_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<StatisticsResponse>, AppError> {
    let stats = state
        .link_service
        .get_statistics(&slug)
        .await
        .map_err(|e| e.conceal("Internal server error"))?
        .ok_or_else(|| AppError::not_found("URL not found", json!({ "slug": slug })))?;

    Ok(Json(stats.into()))
}
