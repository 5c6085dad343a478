//! HTTP layer: router, state, handlers and response types.

pub mod handlers;
pub mod router;
pub mod state;
pub mod types;
