//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Link service backed by the process-local registry.
pub type AppLinkService = LinkService<InMemoryLinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>) -> Self {
        Self { link_service }
    }

    /// Builds state around a fresh, empty registry.
    pub fn in_memory() -> Self {
        let repository = Arc::new(InMemoryLinkRepository::new());
        Self::new(Arc::new(LinkService::new(repository)))
    }
}
