mod transcription_service;

pub use transcription_service::{EMPTY_UPLOAD_MESSAGE, TranscribeError, TranscriptionService};
