//! API route configuration.

use crate::api::handlers::{decode_handler, encode_handler, list_handler, statistics_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /encode`             - Shorten a URL
/// - `GET  /decode/{slug}`      - Resolve a slug (counts a click)
/// - `GET  /statistics/{slug}`  - Statistics for a single link
/// - `GET  /list`               - Statistics for all links, newest first
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/encode", post(encode_handler))
        .route("/decode/{slug}", get(decode_handler))
        .route("/statistics/{slug}", get(statistics_handler))
        .route("/list", get(list_handler))
}
