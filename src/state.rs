//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortlinkService;
use crate::domain::repositories::ShortlinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub shortlink_service: Arc<ShortlinkService>,
}

impl AppState {
    /// Builds the state around any shortlink store.
    pub fn new(repository: Arc<dyn ShortlinkRepository>) -> Self {
        Self {
            shortlink_service: Arc::new(ShortlinkService::new(repository)),
        }
    }
}
