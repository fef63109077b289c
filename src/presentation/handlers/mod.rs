mod error_response;
mod health;
mod transcribe;

pub use error_response::{ErrorResponse, TIMEOUT_MESSAGE};
pub use health::{HealthResponse, health_handler};
pub use transcribe::{FILE_FIELD, TranscribeResponse, transcribe_handler};
