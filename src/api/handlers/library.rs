//! Biblioteca routes: material search with local-then-model fallback,
//! summaries and educational text generation.

use axum::extract::State;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::prompt::{self, budget};
use crate::domain::MaterialFilter;

/// Origin tag for results served from the seeded store.
pub const ORIGIN_LOCAL: &str = "banco-local";

/// Origin tag for model-generated suggestions.
pub const ORIGIN_AI: &str = "ia";

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new("```json|```").expect("valid code-fence regex"));

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub termo: String,
    #[serde(default)]
    pub disciplina: String,
    #[serde(default)]
    pub ano: String,
}

/// Three shapes share this struct: local items, model items, or raw
/// model text with an empty item list. Callers must not assume itemized
/// structure is present.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub origem: &'static str,
    pub itens: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texto: Option<String>,
}

/// POST /biblioteca/buscar
pub async fn buscar(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let filter = MaterialFilter {
        termo: request.termo.trim().to_string(),
        disciplina: request.disciplina.clone(),
        ano: request.ano.clone(),
    };

    let local = state.school.search_materials(&filter).await.map_err(|e| {
        error!(error = %e, "Material lookup failed");
        ApiError::internal("Falha ao buscar materiais.")
    })?;

    if !local.is_empty() {
        return Ok(Json(SearchResponse {
            origem: ORIGIN_LOCAL,
            itens: serde_json::to_value(local)
                .map_err(|_| ApiError::internal("Falha ao buscar materiais."))?,
            texto: None,
        }));
    }

    let prompt =
        prompt::material_suggestions_prompt(&filter.termo, &request.disciplina, &request.ano);
    let raw = state
        .assistant
        .complete(prompt, budget::MATERIAL_SUGGESTIONS)
        .await
        .map_err(|e| {
            error!(error = %e, "Suggestion call failed");
            ApiError::internal("Falha ao buscar materiais.")
        })?;

    Ok(Json(parse_suggestions(&raw)))
}

/// Best-effort parse of the model's suggestion text: strip markdown code
/// fences, then accept only a non-empty JSON array. Anything else falls
/// back to returning the raw trimmed text.
fn parse_suggestions(raw: &str) -> SearchResponse {
    let stripped = CODE_FENCE.replace_all(raw, "");
    let stripped = stripped.trim();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(stripped) {
        if let Some(items) = value.as_array() {
            if !items.is_empty() {
                return SearchResponse {
                    origem: ORIGIN_AI,
                    itens: value,
                    texto: None,
                };
            }
        }
    }

    SearchResponse {
        origem: ORIGIN_AI,
        itens: serde_json::Value::Array(Vec::new()),
        texto: Some(raw.trim().to_string()),
    }
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub conteudo: String,
    #[serde(default)]
    pub publico: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub resumo: String,
}

/// POST /biblioteca/resumo
pub async fn resumo(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let prompt = prompt::summary_prompt(&request.conteudo, &request.publico);
    let resumo = state
        .assistant
        .complete(prompt, budget::SUMMARY)
        .await
        .map_err(|e| {
            error!(error = %e, "Summary call failed");
            ApiError::internal("Falha ao gerar resumo.")
        })?;

    Ok(Json(SummaryResponse { resumo }))
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub tema: String,
    #[serde(default)]
    pub disciplina: String,
    #[serde(default)]
    pub ano: String,
    #[serde(default)]
    pub tipo: String,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub texto: String,
}

/// POST /biblioteca/gerar-texto
pub async fn gerar_texto(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<TextResponse>, ApiError> {
    let prompt = prompt::educational_text_prompt(
        &request.tema,
        &request.disciplina,
        &request.ano,
        &request.tipo,
    );
    let texto = state
        .assistant
        .complete(prompt, budget::EDUCATIONAL_TEXT)
        .await
        .map_err(|e| {
            error!(error = %e, "Text generation call failed");
            ApiError::internal("Falha ao gerar texto.")
        })?;

    Ok(Json(TextResponse { texto }))
}
