use std::sync::Arc;

use crate::application::ports::{Redactor, TranscriptionEngine, TranscriptionError};
use crate::domain::{Transcript, TranscriptionRequest, Upload};

pub const EMPTY_UPLOAD_MESSAGE: &str = "Empty file upload.";

pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
    redactor: Arc<dyn Redactor>,
    model: String,
}

impl TranscriptionService {
    pub fn new(
        engine: Arc<dyn TranscriptionEngine>,
        redactor: Arc<dyn Redactor>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            redactor,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Transcribes the upload and returns the redacted transcript.
    pub async fn transcribe(&self, upload: Upload) -> Result<Transcript, TranscribeError> {
        if upload.is_empty() {
            return Err(TranscribeError::Client(EMPTY_UPLOAD_MESSAGE.to_string()));
        }

        tracing::info!(
            bytes = upload.len(),
            filename = %upload.filename(),
            content_type = %upload.content_type(),
            model = %self.model,
            "Forwarding upload for transcription"
        );

        let request = TranscriptionRequest::new(upload, self.model.clone());
        let transcript = self.engine.transcribe(&request).await?;

        let redaction = self.redactor.redact(transcript.as_str());
        tracing::info!(
            chars = redaction.text.len(),
            redactions = redaction.total_hits(),
            "Transcript redacted"
        );
        for (label, count) in redaction.hits.iter().filter(|(_, count)| *count > 0) {
            tracing::debug!(label = %label, count = count, "Redaction rule matched");
        }

        Ok(Transcript::new(redaction.text))
    }
}

/// Caller-facing failure taxonomy for a transcription request.
#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("{0}")]
    Client(String),
    #[error("upstream returned status {status}")]
    Upstream { status: u16, body: String },
    #[error("upstream request timed out")]
    Timeout,
    #[error("{kind}: {message}")]
    Internal { kind: String, message: String },
}

impl From<TranscriptionError> for TranscribeError {
    fn from(err: TranscriptionError) -> Self {
        match err {
            TranscriptionError::UpstreamStatus { status, body } => Self::Upstream { status, body },
            TranscriptionError::Timeout => Self::Timeout,
            TranscriptionError::Unexpected { kind, message } => Self::Internal { kind, message },
        }
    }
}
