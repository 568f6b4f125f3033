//! Summarizer configuration route (read-only).

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/summarizer/config", get(get_config))
}

/// GET /api/summarizer/config: current settings with keys masked.
async fn get_config(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(serde_json::to_value(state.summarizer_config.to_response()).unwrap_or(Value::Null))
}
