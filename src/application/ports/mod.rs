mod redactor;
mod transcription_engine;

pub use redactor::{Redaction, Redactor};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
