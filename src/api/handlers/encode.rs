//! Handler for the URL encoding endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::encode::{EncodeRequest, EncodeResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, reusing the existing slug if the URL is already known.
///
/// # Endpoint
///
/// `POST /api/encode`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/url" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "slug": "abc123xy" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or the URL is invalid.
/// Returns 500 Internal Server Error if the link could not be stored.
pub async fn encode_handler(
    State(state): State<AppState>,
    payload: Result<Json<EncodeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EncodeResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let slug = state
        .link_service
        .encode(&payload.url)
        .await
        .map_err(|e| e.conceal("Failed to encode URL"))?;

    Ok((StatusCode::CREATED, Json(EncodeResponse { slug })))
}
