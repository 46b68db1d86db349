//! Utility functions.
//!
//! - [`slug_generator`] - Random slug and link id generation
//! - [`url_validator`] - HTTP(S)-only URL validation

pub mod slug_generator;
pub mod url_validator;
