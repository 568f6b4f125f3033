//! Document upload and analysis.

use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use lexsum_ingest::{extract_text_from_bytes, is_allowed_filename, FileType};
use serde_json::Value;
use tracing::{error, info, warn};

use super::{envelope, error_response};
use crate::report;
use crate::state::AppState;

/// Multipart field carrying the document.
pub const DOCUMENT_FIELD: &str = "document";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/summarize", post(summarize))
}

/// An uploaded file pulled out of the multipart body.
struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// POST /api/summarize (and /summarize): analyze an uploaded document.
async fn summarize(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> (StatusCode, Json<Value>) {
    let upload = match multipart {
        Ok(multipart) => match read_upload(multipart).await {
            Ok(upload) => upload,
            Err(response) => return response,
        },
        Err(e) => {
            warn!("Rejected upload: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "No file provided");
        }
    };

    if upload.filename.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No file selected");
    }
    if !is_allowed_filename(&upload.filename) {
        return error_response(
            StatusCode::BAD_REQUEST,
            "File type not allowed. Please upload PDF, DOCX, or TXT files.",
        );
    }

    let file_type = FileType::from_filename(&upload.filename);
    let filename = sanitize_filename(&upload.filename);
    info!("Analyzing upload {} ({} bytes)", filename, upload.bytes.len());

    let bytes = upload.bytes;
    let text = match tokio::task::spawn_blocking(move || extract_text_from_bytes(&bytes, file_type)).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("Extraction failed for {}: {}", filename, e);
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string());
        }
        Err(e) => {
            error!("Extraction task failed: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Text extraction failed");
        }
    };

    let result = state.analyzer().analyze(&text).await;

    let generated_at = chrono::Local::now().naive_local();
    let report_name = match report::write_report(
        &state.config.data_paths.reports,
        &result,
        &filename,
        generated_at,
    ) {
        Ok(name) => name,
        Err(e) => {
            error!("Failed to write report: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to write report: {}", e),
            );
        }
    };

    let mut data = match serde_json::to_value(&result) {
        Ok(data) => data,
        Err(e) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    data["report_url"] = Value::String(format!("/reports/{}", report_name));

    envelope(StatusCode::OK, Some(data), None)
}

/// Find the `document` field, skipping any others.
async fn read_upload(mut multipart: Multipart) -> Result<Upload, (StatusCode, Json<Value>)> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(error_response(StatusCode::BAD_REQUEST, "No file provided")),
            Err(e) => return Err(error_response(e.status(), e.body_text())),
        };

        if field.name() != Some(DOCUMENT_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        return match field.bytes().await {
            Ok(bytes) => Ok(Upload {
                filename,
                bytes: bytes.to_vec(),
            }),
            Err(e) => Err(error_response(e.status(), e.body_text())),
        };
    }
}

/// Strip directory components and characters unsafe in a file name.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    base.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_start_matches('.')
        .to_string()
}
