//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// Responds with `302 Found` and a `Location` header. Each successful
/// redirect increments the link's click counter.
///
/// # Errors
///
/// Returns 404 Not Found if the slug is unknown or the link has expired, and
/// 500 if the stored URL cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state
        .link_service
        .decode(&slug)
        .await
        .map_err(|e| e.conceal("Internal server error"))?
        .ok_or_else(|| AppError::not_found("URL not found or expired", json!({ "slug": slug })))?;

    let location = HeaderValue::try_from(original_url).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "slug": slug, "reason": e.to_string() }),
        )
        .conceal("Internal server error")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
