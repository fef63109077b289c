mod transcript;
mod transcription_request;
mod upload;

pub use transcript::Transcript;
pub use transcription_request::{ResponseFormat, TranscriptionRequest};
pub use upload::{DEFAULT_CONTENT_TYPE, DEFAULT_FILENAME, Upload};
