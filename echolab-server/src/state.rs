use std::sync::Arc;

use echolab_core::DemoConfig;

/// Holds the shared state accessible by all request handlers.
///
/// The configuration is read once at startup and never mutated, so an `Arc`
/// is all the sharing machinery this service needs.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<DemoConfig>,
}

impl AppState {
    /// Creates a new instance of the application state.
    pub fn new(config: DemoConfig) -> Self {
        AppState {
            config: Arc::new(config),
        }
    }
}
