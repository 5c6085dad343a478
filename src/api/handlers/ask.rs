//! POST /api/perguntar - free-form question pass-through

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub pergunta: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub resposta: String,
}

pub async fn perguntar(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    if request.pergunta.is_empty() {
        return Err(ApiError::bad_request("Pergunta é obrigatória"));
    }

    let resposta = state.assistant.ask(&request.pergunta).await.map_err(|e| {
        error!(error = %e, "Upstream call failed for /api/perguntar");
        ApiError::internal("Falha ao consultar a OpenAI")
    })?;

    Ok(Json(AskResponse { resposta }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::test_support::state_with_provider;
    use crate::domain::llm::mock::MockLlmProvider;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_missing_pergunta_is_bad_request() {
        let state = state_with_provider(MockLlmProvider::new().with_response("irrelevante"));

        let result = perguntar(
            State(state),
            Json(AskRequest {
                pergunta: String::new(),
            }),
        )
        .await;

        let err = result.err().unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.erro, "Pergunta é obrigatória");
    }

    #[tokio::test]
    async fn test_answer_is_relayed() {
        let state = state_with_provider(MockLlmProvider::new().with_response("Brasília."));

        let response = perguntar(
            State(state),
            Json(AskRequest {
                pergunta: "Qual a capital do Brasil?".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.resposta, "Brasília.");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500_with_fixed_message() {
        let state = state_with_provider(MockLlmProvider::new().with_error("boom"));

        let err = perguntar(
            State(state),
            Json(AskRequest {
                pergunta: "Oi?".to_string(),
            }),
        )
        .await
        .err()
        .unwrap();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.erro, "Falha ao consultar a OpenAI");
    }
}
