//! HTTP route handlers.

pub mod status;
pub mod summarize;
pub mod summarizer;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::{Json, Router};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let reports = ServeDir::new(&state.config.data_paths.reports);
    // Multipart framing needs a little room above the file itself.
    let body_limit = state.config.max_upload_bytes.saturating_add(64 * 1024);

    Router::new()
        .nest("/api", api_routes())
        .merge(summarize::routes())
        .nest_service("/reports", reports)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(summarize::routes())
        .merge(status::routes())
        .merge(summarizer::routes())
}

/// `{success, data, error}` response body.
pub(crate) fn envelope(
    status: StatusCode,
    data: Option<Value>,
    error: Option<String>,
) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(serde_json::json!({
            "success": error.is_none(),
            "data": data,
            "error": error,
        })),
    )
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Value>) {
    envelope(status, None, Some(message.into()))
}
