//! DTOs for the encode endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct EncodeRequest {
    /// The URL to be shortened. Only `http` and `https` are accepted.
    #[validate(custom(
        function = "crate::utils::url_validator::validate_http_url",
        message = "Invalid URL format"
    ))]
    pub url: String,
}

/// The slug assigned to the submitted URL.
#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub slug: String,
}
