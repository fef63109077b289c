use axum::Json;
use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};

use crate::application::services::TranscribeError;
use crate::domain::Upload;
use crate::presentation::state::AppState;

/// Multipart field carrying the audio.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize, Deserialize)]
pub struct TranscribeResponse {
    pub transcript: String,
}

#[tracing::instrument(skip_all)]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TranscribeResponse>, TranscribeError> {
    let upload = read_upload(multipart).await?;
    let transcript = state.transcription_service.transcribe(upload).await?;

    Ok(Json(TranscribeResponse {
        transcript: transcript.into_inner(),
    }))
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, TranscribeError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| TranscribeError::Client(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            tracing::debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        let filename = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let data = field
            .bytes()
            .await
            .map_err(|e| TranscribeError::Client(format!("Failed to read file: {}", e)))?;

        tracing::debug!(bytes = data.len(), filename = ?filename, "File data received");

        return Ok(Upload::new(data.to_vec(), filename, content_type));
    }

    Err(TranscribeError::Client(format!(
        "No file uploaded. Expected multipart field '{}'.",
        FILE_FIELD
    )))
}
