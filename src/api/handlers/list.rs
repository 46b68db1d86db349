//! Handler for listing every short link.

use axum::{Json, extract::State};

use crate::api::dto::statistics::StatisticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists statistics for all links, most recently created first.
///
/// # Endpoint
///
/// `GET /api/list`
///
/// Returns an empty array when no links exist.
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatisticsResponse>>, AppError> {
    let all = state
        .link_service
        .list_all()
        .await
        .map_err(|e| e.conceal("Internal server error"))?;

    Ok(Json(all.into_iter().map(Into::into).collect()))
}
