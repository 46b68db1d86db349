//! Domain layer containing business entities and logic.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`statistics`] - Read-time statistics derived from a link
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic is orchestrated by services in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
pub mod statistics;
