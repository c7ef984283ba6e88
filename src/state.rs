//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Link service wired to the in-memory registry.
pub type AppLinkService = LinkService<InMemoryLinkRepository>;

/// Handle to the process-wide registry and the service on top of it.
///
/// Cloned into every request; clones share the same registry.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>) -> Self {
        Self { link_service }
    }

    /// State backed by a fresh, empty registry.
    pub fn in_memory(short_link_base: &str) -> Self {
        let repository = Arc::new(InMemoryLinkRepository::new());
        let link_service = LinkService::new(repository).with_short_link_base(short_link_base);
        Self::new(Arc::new(link_service))
    }
}
