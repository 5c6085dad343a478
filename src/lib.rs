//! Classroom assistant backend
//!
//! A small axum service for teachers: every generation route formats a
//! Portuguese prompt template, forwards it to the OpenAI chat-completions
//! API and relays the text back. Classes, saved questions and calendar
//! events live in an in-memory store; the class list can be exported as
//! an xlsx attachment.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::llm::{HttpClient, OpenAiProvider};
use infrastructure::school::InMemorySchoolRepository;
use infrastructure::services::AssistantService;

/// Create the application state with all services initialized.
///
/// Requires `OPENAI_API_KEY` in the environment; everything else has
/// in-memory defaults.
pub fn create_app_state() -> anyhow::Result<AppState> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY is not set"))?;

    let provider = OpenAiProvider::new(HttpClient::new(), api_key);
    let assistant = AssistantService::new(Arc::new(provider));
    let repository = InMemorySchoolRepository::with_seed_materials();

    Ok(AppState {
        assistant: Arc::new(assistant),
        school: Arc::new(repository),
    })
}
