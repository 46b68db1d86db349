//! # URL Encoder
//!
//! An in-memory URL shortening service built with Axum.
//!
//! Long URLs are mapped to 8-character slugs. Resolving a slug redirects to
//! the original URL and counts a click; per-link statistics are derived on
//! demand. State lives only in process memory.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity, repository trait, statistics derivation
//! - **Application Layer** ([`application`]) - Encode / decode / statistics orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory link registry
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"   # Optional
//! cargo run
//!
//! curl -X POST localhost:3000/api/encode -H 'content-type: application/json' \
//!      -d '{"url":"https://example.com/very/long/url"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::statistics::LinkStatistics;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
