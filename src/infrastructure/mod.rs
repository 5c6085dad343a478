//! Infrastructure layer: OpenAI client, in-memory store, xlsx writer,
//! logging and the assistant service.

pub mod export;
pub mod llm;
pub mod logging;
pub mod school;
pub mod services;
