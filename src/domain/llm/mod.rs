//! LLM domain types and the provider trait.

mod message;
mod provider;
mod request;
mod response;

pub use message::{Message, MessageRole};
pub use provider::LlmProvider;
pub use request::LlmRequest;
pub use response::LlmResponse;

#[cfg(test)]
pub use provider::mock;
