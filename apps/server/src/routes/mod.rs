pub mod content;
pub mod health;

use std::path::PathBuf;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get, MethodRouter},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Route precedence, most specific first:
///
/// 1. the three content API routes under /api
/// 2. /health
/// 3. static assets under the public directory
/// 4. everything else, on any verb, serves the site entry document so the
///    client can do its own routing
///
/// 3 and 4 live in the router fallback, so they can never shadow 1 or 2.
pub fn build_router(state: AppState) -> Router {
    let index = state.config.public_dir.join("index.html");
    let entry: MethodRouter = any(move || {
        let index = index.clone();
        async move { serve_entry_document(index).await }
    });

    // `fallback`, not `not_found_service`: the latter would force 404 onto
    // the entry document, and unmatched paths must answer 200.
    let site = ServeDir::new(&state.config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(entry);

    Router::new()
        .route("/api/info", get(content::handle_info))
        .route("/api/languages", get(content::handle_languages))
        .route("/api/services", get(content::handle_services))
        .route("/health", get(health::health_handler))
        .fallback_service(site)
        .with_state(state)
}

/// Serves the static site entry document with status 200.
async fn serve_entry_document(path: PathBuf) -> Response {
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("could not read entry document {}: {err}", path.display());
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
