use std::fmt;

use super::upload::Upload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound transcription call: the upload plus what to ask the backend for.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub upload: Upload,
    pub model: String,
    pub response_format: ResponseFormat,
}

impl TranscriptionRequest {
    pub fn new(upload: Upload, model: impl Into<String>) -> Self {
        Self {
            upload,
            model: model.into(),
            response_format: ResponseFormat::Json,
        }
    }
}
