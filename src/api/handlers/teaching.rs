//! Generation routes that absorb upstream failures: activity, homework
//! correction, lesson planning and guardian messages all answer 200 with
//! the fixed fallback string when the completion call fails.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::Json;
use crate::domain::prompt::{self, budget};

#[derive(Debug, Deserialize)]
pub struct ActivityRequest {
    #[serde(default)]
    pub ano: String,
    #[serde(default)]
    pub materia: String,
    #[serde(default)]
    pub tipo: String,
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub atividade: String,
}

/// POST /gerar-atividade
pub async fn gerar_atividade(
    State(state): State<AppState>,
    Json(request): Json<ActivityRequest>,
) -> Json<ActivityResponse> {
    let prompt = prompt::activity_prompt(&request.ano, &request.materia, &request.tipo);
    let atividade = state
        .assistant
        .complete_or_fallback(prompt, budget::ACTIVITY)
        .await;

    Json(ActivityResponse { atividade })
}

#[derive(Debug, Deserialize)]
pub struct CorrectionRequest {
    #[serde(default, rename = "respostaAluno")]
    pub resposta_aluno: String,
    #[serde(default)]
    pub gabarito: String,
}

#[derive(Debug, Serialize)]
pub struct CorrectionResponse {
    pub correcao: String,
}

/// POST /corrigir-tarefa
pub async fn corrigir_tarefa(
    State(state): State<AppState>,
    Json(request): Json<CorrectionRequest>,
) -> Json<CorrectionResponse> {
    let prompt = prompt::correction_prompt(&request.resposta_aluno, &request.gabarito);
    let correcao = state
        .assistant
        .complete_or_fallback(prompt, budget::CORRECTION)
        .await;

    Json(CorrectionResponse { correcao })
}

#[derive(Debug, Deserialize)]
pub struct LessonPlanRequest {
    #[serde(default)]
    pub ano: String,
    #[serde(default)]
    pub materia: String,
    #[serde(default)]
    pub semana: String,
}

#[derive(Debug, Serialize)]
pub struct LessonPlanResponse {
    pub planejamento: String,
}

/// POST /planejar-aula
pub async fn planejar_aula(
    State(state): State<AppState>,
    Json(request): Json<LessonPlanRequest>,
) -> Json<LessonPlanResponse> {
    let prompt = prompt::lesson_plan_prompt(&request.ano, &request.materia, &request.semana);
    let planejamento = state
        .assistant
        .complete_or_fallback(prompt, budget::LESSON_PLAN)
        .await;

    Json(LessonPlanResponse { planejamento })
}

#[derive(Debug, Deserialize)]
pub struct GuardianMessageRequest {
    #[serde(default)]
    pub aluno: String,
    #[serde(default)]
    pub mensagem: String,
}

#[derive(Debug, Serialize)]
pub struct GuardianMessageResponse {
    pub mensagem: String,
}

/// POST /enviar-mensagem
pub async fn enviar_mensagem(
    State(state): State<AppState>,
    Json(request): Json<GuardianMessageRequest>,
) -> Json<GuardianMessageResponse> {
    let prompt = prompt::guardian_message_prompt(&request.aluno, &request.mensagem);
    let mensagem = state
        .assistant
        .complete_or_fallback(prompt, budget::GUARDIAN_MESSAGE)
        .await;

    Json(GuardianMessageResponse { mensagem })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::test_support::state_with_provider;
    use crate::domain::llm::mock::MockLlmProvider;
    use crate::infrastructure::services::FALLBACK_MESSAGE;

    #[tokio::test]
    async fn test_activity_relays_generated_text() {
        let state = state_with_provider(MockLlmProvider::new().with_response("Atividade: ..."));

        let response = gerar_atividade(
            State(state),
            Json(ActivityRequest {
                ano: "3º ano".to_string(),
                materia: "Português".to_string(),
                tipo: "interpretação".to_string(),
            }),
        )
        .await;

        assert_eq!(response.0.atividade, "Atividade: ...");
    }

    #[tokio::test]
    async fn test_activity_falls_back_on_upstream_failure() {
        let state = state_with_provider(MockLlmProvider::new().with_error("boom"));

        let response = gerar_atividade(
            State(state),
            Json(ActivityRequest {
                ano: String::new(),
                materia: String::new(),
                tipo: String::new(),
            }),
        )
        .await;

        assert_eq!(response.0.atividade, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_correction_falls_back_on_upstream_failure() {
        let state = state_with_provider(MockLlmProvider::new().with_error("boom"));

        let response = corrigir_tarefa(
            State(state),
            Json(CorrectionRequest {
                resposta_aluno: "4".to_string(),
                gabarito: "5".to_string(),
            }),
        )
        .await;

        assert_eq!(response.0.correcao, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_guardian_message_is_relayed() {
        let state =
            state_with_provider(MockLlmProvider::new().with_response("Prezado responsável, ..."));

        let response = enviar_mensagem(
            State(state),
            Json(GuardianMessageRequest {
                aluno: "João".to_string(),
                mensagem: "faltou hoje".to_string(),
            }),
        )
        .await;

        assert_eq!(response.0.mensagem, "Prezado responsável, ...");
    }
}
