use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{Transcript, TranscriptionRequest};

/// Canned backend for tests and local runs without upstream credentials.
pub struct MockTranscriptionEngine {
    outcome: Result<String, TranscriptionError>,
    calls: AtomicUsize,
}

impl MockTranscriptionEngine {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: TranscriptionError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _request: &TranscriptionRequest,
    ) -> Result<Transcript, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map(Transcript::new)
    }
}
