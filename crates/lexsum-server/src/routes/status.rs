//! Service status and article catalog routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(get_status))
        .route("/articles", get(list_articles))
}

/// GET /api/status: summarizer and limits.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let analyzer = state.analyzer();
    let summarizer = analyzer.summarizer();
    let settings = analyzer.settings();

    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "summarizer": {
            "available": summarizer.is_available(),
            "name": summarizer.name(),
        },
        "articles": state.catalog.len(),
        "maxUploadBytes": state.config.max_upload_bytes,
        "chunkChars": settings.chunk_chars,
        "summaryConcurrency": settings.summary_concurrency,
        "summaryTimeoutSecs": settings.summary_timeout_secs,
        "allowedExtensions": lexsum_ingest::ALLOWED_EXTENSIONS,
    }))
}

/// GET /api/articles: the loaded catalog.
async fn list_articles(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "articles": state.catalog.articles(),
        "total": state.catalog.len(),
    }))
}
