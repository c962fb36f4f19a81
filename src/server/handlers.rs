use super::types::AnalyzeRequest;
use crate::{Error, Result, extract, gemini::GeminiClient};
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<dyn GeminiClient>,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> std::result::Result<Json<Value>, (StatusCode, Json<Value>)> {
    info!(
        "Received analyze request ({} bytes of image data)",
        request.image.len()
    );

    match process(&state, &request).await {
        Ok(result) => {
            info!("Successfully extracted analysis result");
            Ok(Json(result))
        }
        Err(e) => Err(failure_response(e)),
    }
}

async fn process(state: &AppState, request: &AnalyzeRequest) -> Result<Value> {
    let raw = state
        .gemini
        .generate_content(request.base64_payload())
        .await?;

    extract::extract(&raw)
}

/// Converts every failure into a 500 response with a machine-readable
/// `error` tag plus the best-effort diagnostic payload. Nothing is retried
/// and no failure escapes the request boundary.
fn failure_response(err: Error) -> (StatusCode, Json<Value>) {
    let body = match err {
        Error::InvalidUpstreamResponse { raw } => {
            warn!("Gemini returned no usable text: {}", raw);
            json!({ "error": "gemini_invalid_response", "detail": raw })
        }
        Error::TextCleaningFailed { raw } => {
            warn!("Failed to clean model text");
            json!({ "error": "replace_failed", "raw": raw })
        }
        Error::JsonParseFailed { raw } => {
            warn!("Model text was not valid JSON: {}", raw);
            json!({ "error": "json_parse_failed", "raw": raw })
        }
        other => {
            error!("Analyze request failed: {}", other);
            json!({ "error": "server_crash", "detail": other.to_string() })
        }
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
}
