use std::sync::Arc;

use crate::config::AppConfig;

/// Handle to the application state cloned into every request.
pub type SharedState = Arc<AppState>;

/// Application state shared by every handler. Requests never mutate it.
pub struct AppState {
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self { config })
    }

    /// Limits and defaults applied to incoming requests.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
