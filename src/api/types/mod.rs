mod error;
mod json;

pub use error::{ApiError, ApiErrorBody};
pub use json::Json;
