use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::handlers::{ask, exams, export, library, school, teaching};
use super::state::AppState;

/// Create the application router: API routes plus the static client,
/// with any non-matched path falling back to the application shell.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/perguntar", post(ask::perguntar))
        .route("/gerar-atividade", post(teaching::gerar_atividade))
        .route("/corrigir-tarefa", post(teaching::corrigir_tarefa))
        .route("/planejar-aula", post(teaching::planejar_aula))
        .route("/adicionar-turma", post(school::adicionar_turma))
        .route("/salvar-questao", post(school::salvar_questao))
        .route("/gerar-prova", post(exams::gerar_prova))
        .route("/adicionar-evento", post(school::adicionar_evento))
        .route("/enviar-mensagem", post(teaching::enviar_mensagem))
        .route("/biblioteca/buscar", post(library::buscar))
        .route("/biblioteca/resumo", post(library::resumo))
        .route("/biblioteca/gerar-texto", post(library::gerar_texto))
        .route("/exportar-excel", get(export::exportar_excel))
        .fallback_service(
            ServeDir::new("public").fallback(ServeFile::new("public/index.html")),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
