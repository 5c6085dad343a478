//! Domain layer: entities, prompt templates and the LLM provider seam.
//! No I/O lives here.

pub mod error;
pub mod exam;
pub mod llm;
pub mod prompt;
pub mod school;

pub use error::DomainError;
pub use exam::ExamPaper;
pub use llm::{LlmProvider, LlmRequest, LlmResponse, Message, MessageRole};
pub use school::{Event, Material, MaterialFilter, Question, SchoolClass, SchoolRepository};
