use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::content::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// A storage failure is terminal for its request only: it becomes the fixed
/// `{"error": "Failed to load <kind> data"}` envelope with status 500 and is
/// logged server-side. It never crashes the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Storage(err) => {
                tracing::error!("content store failure: {err}");
                let body = Json(json!({ "error": err.kind().error_message() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
