//! Random slug and link id generation.
//!
//! Both identifiers are random bytes from the operating system encoded as
//! URL-safe base64 without padding (alphabet `A-Z a-z 0-9 - _`).

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Random bytes per slug; 6 bytes encode to exactly 8 characters.
const SLUG_LENGTH_BYTES: usize = 6;

/// Random bytes per link id; 16 bytes encode to 22 characters.
const ID_LENGTH_BYTES: usize = 16;

/// Generates an 8-character URL-safe slug.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug()?;
/// assert_eq!(slug.len(), 8);
/// ```
pub fn generate_slug() -> Result<String, AppError> {
    random_token::<SLUG_LENGTH_BYTES>()
}

/// Generates an opaque link id, unique for the lifetime of the process.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_id() -> Result<String, AppError> {
    random_token::<ID_LENGTH_BYTES>()
}

fn random_token<const N: usize>() -> Result<String, AppError> {
    let mut buffer = [0u8; N];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random bytes",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
