//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization with camelCase field names, and
//! validator for input validation.

pub mod decode;
pub mod encode;
pub mod health;
pub mod statistics;
