//! Completion service shared by every generation route.
//!
//! Two failure policies coexist across the routes and both are kept
//! explicit here: `complete` propagates the upstream error to the caller
//! (routes answering 4xx/5xx), `complete_or_fallback` absorbs it and
//! returns the fixed fallback string with a success status.

use std::sync::Arc;

use tracing::warn;

use crate::domain::{DomainError, LlmProvider, LlmRequest};

/// Model used by the free-form question route.
pub const ASK_MODEL: &str = "gpt-4o-mini";

/// Model used by every templated generation route.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Fixed string returned when an absorbed completion call fails.
pub const FALLBACK_MESSAGE: &str = "Erro ao gerar conteúdo via IA.";

const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Thin wrapper around the LLM provider applying the standard model,
/// temperature and per-route token budget.
pub struct AssistantService {
    provider: Arc<dyn LlmProvider>,
}

impl AssistantService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Free-form question, no template. Upstream failures propagate.
    pub async fn ask(&self, pergunta: &str) -> Result<String, DomainError> {
        let request = LlmRequest::prompt(pergunta);
        let response = self.provider.chat(ASK_MODEL, request).await?;
        Ok(response.message.content)
    }

    /// Templated completion; upstream failures propagate to the route.
    pub async fn complete(&self, prompt: String, max_tokens: u32) -> Result<String, DomainError> {
        let request = LlmRequest::prompt(prompt)
            .with_temperature(DEFAULT_TEMPERATURE)
            .with_max_tokens(max_tokens);
        let response = self.provider.chat(DEFAULT_MODEL, request).await?;
        Ok(response.message.content)
    }

    /// Templated completion; upstream failures are absorbed and replaced
    /// by the fixed fallback string.
    pub async fn complete_or_fallback(&self, prompt: String, max_tokens: u32) -> String {
        match self.complete(prompt, max_tokens).await {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "Completion failed, returning fallback");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::mock::MockLlmProvider;

    fn service_with(provider: MockLlmProvider) -> AssistantService {
        AssistantService::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn test_complete_returns_content() {
        let service = service_with(MockLlmProvider::new().with_response("Plano de aula pronto."));
        let result = service.complete("Crie um plano".to_string(), 1000).await;
        assert_eq!(result.unwrap(), "Plano de aula pronto.");
    }

    #[tokio::test]
    async fn test_complete_propagates_errors() {
        let service = service_with(MockLlmProvider::new().with_error("rate limited"));
        let result = service.complete("Crie um plano".to_string(), 1000).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fallback_absorbs_errors() {
        let service = service_with(MockLlmProvider::new().with_error("rate limited"));
        let result = service
            .complete_or_fallback("Crie um plano".to_string(), 1000)
            .await;
        assert_eq!(result, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_ask_uses_provider() {
        let service = service_with(MockLlmProvider::new().with_response("A capital é Brasília."));
        let result = service.ask("Qual a capital do Brasil?").await;
        assert_eq!(result.unwrap(), "A capital é Brasília.");
    }
}
