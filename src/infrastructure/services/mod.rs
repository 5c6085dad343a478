mod assistant;

pub use assistant::{AssistantService, ASK_MODEL, DEFAULT_MODEL, FALLBACK_MESSAGE};
