use axum::{extract::State, http::header, response::IntoResponse};

use crate::content::DocumentKind;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/info
pub async fn handle_info(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    serve_document(&state, DocumentKind::Info).await
}

/// GET /api/languages
pub async fn handle_languages(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    serve_document(&state, DocumentKind::Languages).await
}

/// GET /api/services
pub async fn handle_services(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    serve_document(&state, DocumentKind::Services).await
}

/// Responds with the stored document bytes, verbatim.
async fn serve_document(
    state: &AppState,
    kind: DocumentKind,
) -> Result<impl IntoResponse, AppError> {
    let body = state.store.load(kind).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
