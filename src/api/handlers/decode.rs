//! Handler for the slug decoding endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::decode::DecodeResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a slug to its original URL without redirecting.
///
/// Counts as a visit: the link's click counter is incremented.
///
/// # Endpoint
///
/// `GET /api/decode/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if the slug is unknown or the link has expired.
/// Returns 500 Internal Server Error on unexpected registry failure.
pub async fn decode_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DecodeResponse>, AppError> {
    let original_url = state
        .link_service
        .decode(&slug)
        .await
        .map_err(|e| e.conceal("Failed to decode URL"))?
        .ok_or_else(|| AppError::not_found("URL not found or expired", json!({ "slug": slug })))?;

    Ok(Json(DecodeResponse { original_url }))
}
