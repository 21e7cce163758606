//! Application state for the API server

use crate::ChapterService;
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// Cloned per request (one Arc clone).
#[derive(Clone)]
pub struct AppState {
    /// Chapter assembly
    pub service: Arc<ChapterService>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service: Arc<ChapterService>) -> Self {
        Self { service }
    }
}
