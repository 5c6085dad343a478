//! GET /exportar-excel - class list as an xlsx attachment

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::infrastructure::export::{class_list_workbook, XLSX_CONTENT_TYPE};

pub async fn exportar_excel(State(state): State<AppState>) -> Result<Response, ApiError> {
    let classes = state.school.list_classes().await?;
    let bytes = class_list_workbook(&classes)?;

    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=turmas.xlsx",
        ),
    ];

    Ok((headers, bytes).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::test_support::state_with_provider;
    use crate::domain::llm::mock::MockLlmProvider;
    use crate::domain::SchoolClass;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_export_returns_attachment_headers() {
        let state = state_with_provider(MockLlmProvider::new());
        state
            .school
            .add_class(SchoolClass::new("Turma A"))
            .await
            .unwrap();

        let response = exportar_excel(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            XLSX_CONTENT_TYPE
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=turmas.xlsx"
        );
    }
}
