//! In-memory implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;

/// Process-local link registry.
///
/// Links are keyed by id. Two indexes map slugs and original URLs back to ids,
/// so neither lookup has to scan the stored links. All state sits behind one
/// lock and each repository call acquires it exactly once.
///
/// Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Registry>,
}

#[derive(Default)]
struct Registry {
    links: HashMap<String, Link>,
    slug_index: HashMap<String, String>,
    url_index: HashMap<String, String>,
    /// Ids in insertion order.
    order: Vec<String>,
}

impl Registry {
    fn link_by_slug(&self, slug: &str) -> Option<&Link> {
        let id = self.slug_index.get(slug)?;
        self.links.get(id)
    }
}

impl InMemoryLinkRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Registry>, AppError> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Registry>, AppError> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> AppError {
    AppError::internal("Link registry is unavailable", json!({}))
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let mut registry = self.write()?;

        if let Some(id) = registry.url_index.get(&new_link.original_url)
            && let Some(existing) = registry.links.get(id)
        {
            return Ok(InsertOutcome::Existing(existing.clone()));
        }

        if registry.slug_index.contains_key(&new_link.slug) {
            return Err(AppError::conflict(
                "Slug already exists",
                json!({ "slug": new_link.slug }),
            ));
        }

        let link = Link::from_new(new_link);
        registry
            .slug_index
            .insert(link.slug.clone(), link.id.clone());
        registry
            .url_index
            .insert(link.original_url.clone(), link.id.clone());
        registry.order.push(link.id.clone());
        registry.links.insert(link.id.clone(), link.clone());

        Ok(InsertOutcome::Created(link))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        Ok(self.read()?.link_by_slug(slug).cloned())
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let registry = self.read()?;
        Ok(registry
            .url_index
            .get(original_url)
            .and_then(|id| registry.links.get(id))
            .cloned())
    }

    async fn record_click(
        &self,
        slug: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Link>, AppError> {
        let mut registry = self.write()?;

        let Some(id) = registry.slug_index.get(slug).cloned() else {
            return Ok(None);
        };
        let Some(link) = registry.links.get_mut(&id) else {
            return Ok(None);
        };
        if link.is_expired_at(now) {
            return Ok(None);
        }

        link.clicks += 1;
        Ok(Some(link.clone()))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let registry = self.read()?;

        let mut links: Vec<Link> = registry
            .order
            .iter()
            .rev()
            .filter_map(|id| registry.links.get(id))
            .cloned()
            .collect();
        // Stable sort keeps newest-inserted first among equal timestamps.
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(links)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.read()?.links.len())
    }
}

#[cfg(test)]
impl InMemoryLinkRepository {
    /// Overwrites a stored link's expiry.
    pub(crate) fn set_expiry(&self, slug: &str, expires_at: Option<DateTime<Utc>>) {
        let mut registry = self.inner.write().unwrap();
        let id = registry.slug_index.get(slug).cloned().unwrap();
        registry.links.get_mut(&id).unwrap().expires_at = expires_at;
    }

    /// Drops a link's body while leaving its slug in the index.
    pub(crate) fn remove_body(&self, slug: &str) {
        let mut registry = self.inner.write().unwrap();
        let id = registry.slug_index.get(slug).cloned().unwrap();
        registry.links.remove(&id);
    }
}
