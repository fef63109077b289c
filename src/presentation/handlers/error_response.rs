use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::services::TranscribeError;

pub const TIMEOUT_MESSAGE: &str = "Transcription timed out upstream. Try a shorter audio clip.";

const MAX_UPSTREAM_BODY_CHARS: usize = 500;
const MAX_INTERNAL_DETAIL_CHARS: usize = 300;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: Value,
}

impl IntoResponse for TranscribeError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            TranscribeError::Client(message) => {
                tracing::warn!(error = %message, "Rejected transcription request");
                (StatusCode::BAD_REQUEST, Value::String(message))
            }
            TranscribeError::Upstream { status, body } => {
                tracing::error!(upstream_status = status, "Upstream transcription failed");
                (StatusCode::BAD_GATEWAY, upstream_error(status, &body))
            }
            TranscribeError::Timeout => {
                tracing::error!("Upstream transcription timed out");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    Value::String(TIMEOUT_MESSAGE.to_string()),
                )
            }
            TranscribeError::Internal { kind, message } => {
                tracing::error!(kind = %kind, error = %message, "Transcription failed unexpectedly");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Value::String(format!(
                        "Internal error ({}): {}",
                        kind,
                        truncate_chars(&message, MAX_INTERNAL_DETAIL_CHARS)
                    )),
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Upstream JSON passes through as-is; anything else is truncated and tagged with the status.
fn upstream_error(status: u16, body: &str) -> Value {
    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => parsed,
        Err(_) => json!({
            "upstream_status": status,
            "body": truncate_chars(body, MAX_UPSTREAM_BODY_CHARS),
        }),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
