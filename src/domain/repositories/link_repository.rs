//! Repository trait for short link storage.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Result of an insert attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome {
    /// The link was stored.
    Created(Link),
    /// A link for the same original URL already existed; nothing was stored.
    Existing(Link),
}

/// Repository interface for managing short links.
///
/// Every method is a single atomic operation against the store. Compound
/// sequences such as "check for an existing URL, then insert" or "check
/// expiry, then count a click" happen inside one call so that concurrent
/// requests cannot interleave them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local registry
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link unless one with the same original URL exists.
    ///
    /// # Returns
    ///
    /// - `Ok(InsertOutcome::Created(link))` if the link was stored
    /// - `Ok(InsertOutcome::Existing(link))` if the URL was already known
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken. Nothing is
    /// stored in that case.
    /// Returns [`AppError::Internal`] if the store is unusable.
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Finds a link by its slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if the slug is unknown
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its exact original URL.
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError>;

    /// Counts one click on the link behind `slug`.
    ///
    /// Returns the updated link, or `Ok(None)` without touching any counter if
    /// the slug is unknown or the link is expired at `now`.
    async fn record_click(&self, slug: &str, now: DateTime<Utc>)
    -> Result<Option<Link>, AppError>;

    /// Lists every link, most recently created first.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Counts stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
