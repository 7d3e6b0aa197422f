//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Services shared by every request.
///
/// Both services wrap the same repository, so links created through
/// [`LinkService`] are immediately visible to [`StatsService`].
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<InMemoryLinkRepository>>,
}

impl AppState {
    /// Builds the state around a single shared repository.
    pub fn new(repository: Arc<InMemoryLinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone())),
            stats_service: Arc::new(StatsService::new(repository)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryLinkRepository::new()))
    }
}
