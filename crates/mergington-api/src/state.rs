//! Shared application state for the activities API.

use std::sync::Arc;

use mergington_activities::ActivityStore;

/// Where `GET /` sends browsers by default.
pub const DEFAULT_REDIRECT_TARGET: &str = "/static/index.html";

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The activity registry every handler reads and mutates.
    pub store: Arc<ActivityStore>,
    /// Location of the static frontend served by an external collaborator.
    pub redirect_target: String,
}

impl AppState {
    /// Create state around an existing store.
    pub fn new(store: Arc<ActivityStore>) -> Self {
        Self {
            store,
            redirect_target: DEFAULT_REDIRECT_TARGET.to_owned(),
        }
    }

    /// Point `GET /` at a different frontend location.
    #[must_use]
    pub fn with_redirect_target(mut self, target: impl Into<String>) -> Self {
        self.redirect_target = target.into();
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ActivityStore::with_seed_data()))
    }
}
