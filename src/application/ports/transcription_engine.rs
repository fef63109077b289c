use async_trait::async_trait;

use crate::domain::{Transcript, TranscriptionRequest};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TranscriptionError {
    #[error("upstream returned status {status}")]
    UpstreamStatus { status: u16, body: String },
    #[error("upstream request timed out")]
    Timeout,
    #[error("{kind}: {message}")]
    Unexpected { kind: String, message: String },
}
