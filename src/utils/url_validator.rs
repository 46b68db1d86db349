//! Validation of URLs submitted for shortening.

use std::borrow::Cow;
use url::Url;
use validator::ValidationError;

/// Accepts only absolute `http`/`https` URLs that can be stored and later
/// sent back verbatim in a `Location` header.
///
/// # Rules
///
/// - Must parse as an absolute URL
/// - Scheme must be `http` or `https`; `javascript:`, `data:`, `file:`, etc.
///   are rejected
/// - Must contain no ASCII control characters. The URL parser strips tabs and
///   newlines silently, but the submitted string is what gets stored.
///
/// # Errors
///
/// Returns a [`ValidationError`] with code `url` describing the violation.
pub fn validate_http_url(input: &str) -> Result<(), ValidationError> {
    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(invalid("URL must not contain control characters"));
    }

    let url = Url::parse(input).map_err(|_| invalid("Invalid URL format"))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(invalid("Only HTTP and HTTPS protocols are allowed")),
    }
}

fn invalid(message: &'static str) -> ValidationError {
    ValidationError::new("url").with_message(Cow::Borrowed(message))
}
