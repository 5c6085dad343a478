//! Application state for shared services

use std::sync::Arc;

use crate::domain::SchoolRepository;
use crate::infrastructure::services::AssistantService;

/// Shared state: the completion service and the in-memory school store.
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<AssistantService>,
    pub school: Arc<dyn SchoolRepository>,
}
