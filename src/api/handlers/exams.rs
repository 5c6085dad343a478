//! POST /gerar-prova - exam generation with answer-key split

use axum::extract::State;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::exam::{split_answer_key, ExamPaper};
use crate::domain::prompt::{self, budget};

#[derive(Debug, Deserialize)]
pub struct ExamRequest {
    #[serde(default)]
    pub turma: String,
    #[serde(default)]
    pub quantidade: String,
    #[serde(default)]
    pub ano: String,
    #[serde(default)]
    pub materia: String,
}

/// Unlike the other generation routes, an upstream failure here
/// propagates as a 500 with the raw error message.
pub async fn gerar_prova(
    State(state): State<AppState>,
    Json(request): Json<ExamRequest>,
) -> Result<Json<ExamPaper>, ApiError> {
    let count = prompt::parse_question_count(&request.quantidade);
    let prompt = prompt::exam_prompt(count, &request.ano, &request.materia, &request.turma);

    let text = state
        .assistant
        .complete(prompt, budget::EXAM)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(split_answer_key(&text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::test_support::state_with_provider;
    use crate::domain::exam::MISSING_ANSWER_KEY;
    use crate::domain::llm::mock::MockLlmProvider;
    use axum::http::StatusCode;

    fn request() -> ExamRequest {
        ExamRequest {
            turma: "Turma A".to_string(),
            quantidade: "abc".to_string(),
            ano: "3º ano".to_string(),
            materia: "Matemática".to_string(),
        }
    }

    #[tokio::test]
    async fn test_exam_is_split_into_questions_and_key() {
        let state = state_with_provider(
            MockLlmProvider::new()
                .with_response("Questão 1: 2+2?\nA) 3 B) 4\n\nGabarito:\nQuestão 1: B"),
        );

        let response = gerar_prova(State(state), Json(request())).await.unwrap();

        assert_eq!(response.0.prova, "Questão 1: 2+2?\nA) 3 B) 4");
        assert_eq!(response.0.gabarito, ":\nQuestão 1: B");
    }

    #[tokio::test]
    async fn test_missing_key_uses_placeholder() {
        let state =
            state_with_provider(MockLlmProvider::new().with_response("Questão 1: 2+2?\nA) 3 B) 4"));

        let response = gerar_prova(State(state), Json(request())).await.unwrap();

        assert_eq!(response.0.gabarito, MISSING_ANSWER_KEY);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500_with_error_message() {
        let state = state_with_provider(MockLlmProvider::new().with_error("quota exceeded"));

        let err = gerar_prova(State(state), Json(request())).await.err().unwrap();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.body.erro.contains("quota exceeded"));
    }
}
