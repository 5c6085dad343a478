//! CRUD routes over the in-memory store: classes, question bank and
//! calendar events. These never fail beyond a lock error and always
//! answer 200 with a confirmation message.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{Event, Question, SchoolClass};

#[derive(Debug, Serialize)]
pub struct ConfirmationResponse {
    pub mensagem: String,
}

#[derive(Debug, Deserialize)]
pub struct AddClassRequest {
    #[serde(default, rename = "nomeTurma")]
    pub nome_turma: String,
}

/// POST /adicionar-turma
pub async fn adicionar_turma(
    State(state): State<AppState>,
    Json(request): Json<AddClassRequest>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    let nome = request.nome_turma;
    state.school.add_class(SchoolClass::new(nome.clone())).await?;

    Ok(Json(ConfirmationResponse {
        mensagem: format!("Turma \"{nome}\" adicionada com sucesso!"),
    }))
}

#[derive(Debug, Deserialize)]
pub struct SaveQuestionRequest {
    #[serde(default)]
    pub questao: String,
    #[serde(default)]
    pub disciplina: String,
    #[serde(default)]
    pub resposta: String,
}

/// POST /salvar-questao
pub async fn salvar_questao(
    State(state): State<AppState>,
    Json(request): Json<SaveQuestionRequest>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    state
        .school
        .add_question(Question {
            questao: request.questao,
            disciplina: request.disciplina,
            resposta: request.resposta,
        })
        .await?;

    Ok(Json(ConfirmationResponse {
        mensagem: "Questão salva com sucesso!".to_string(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct AddEventRequest {
    #[serde(default)]
    pub evento: String,
    #[serde(default)]
    pub data: String,
}

/// POST /adicionar-evento
pub async fn adicionar_evento(
    State(state): State<AppState>,
    Json(request): Json<AddEventRequest>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    let mensagem = format!(
        "Evento \"{}\" adicionado para {}.",
        request.evento, request.data
    );

    state
        .school
        .add_event(Event {
            evento: request.evento,
            data: request.data,
        })
        .await?;

    Ok(Json(ConfirmationResponse { mensagem }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::test_support::state_with_provider;
    use crate::domain::llm::mock::MockLlmProvider;

    fn state() -> AppState {
        state_with_provider(MockLlmProvider::new())
    }

    #[tokio::test]
    async fn test_add_class_confirms_with_exact_name() {
        let state = state();

        let response = adicionar_turma(
            State(state.clone()),
            Json(AddClassRequest {
                nome_turma: "5º ano B".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(
            response.0.mensagem,
            "Turma \"5º ano B\" adicionada com sucesso!"
        );

        let classes = state.school.list_classes().await.unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].nome, "5º ano B");
    }

    #[tokio::test]
    async fn test_missing_class_name_still_succeeds() {
        let state = state();

        let response = adicionar_turma(
            State(state.clone()),
            Json(AddClassRequest {
                nome_turma: String::new(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.mensagem, "Turma \"\" adicionada com sucesso!");
        assert_eq!(state.school.list_classes().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_question_confirmation() {
        let response = salvar_questao(
            State(state()),
            Json(SaveQuestionRequest {
                questao: "Quanto é 2+2?".to_string(),
                disciplina: "Matemática".to_string(),
                resposta: "4".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.mensagem, "Questão salva com sucesso!");
    }

    #[tokio::test]
    async fn test_add_event_confirmation_carries_fields() {
        let response = adicionar_evento(
            State(state()),
            Json(AddEventRequest {
                evento: "Feira de ciências".to_string(),
                data: "12/09".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(
            response.0.mensagem,
            "Evento \"Feira de ciências\" adicionado para 12/09."
        );
    }
}
