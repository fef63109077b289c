use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{Transcript, TranscriptionRequest, Upload};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini-transcribe";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiWhisperEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| classify_request_error(&e))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url)
    }
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: Option<String>,
}

fn file_part(upload: &Upload) -> multipart::Part {
    let part = || {
        multipart::Part::bytes(upload.data().to_vec()).file_name(upload.filename().to_string())
    };

    part().mime_str(upload.content_type()).unwrap_or_else(|e| {
        tracing::warn!(
            content_type = %upload.content_type(),
            error = %e,
            "Unparseable upload content type, sending without one"
        );
        part()
    })
}

fn classify_request_error(err: &reqwest::Error) -> TranscriptionError {
    if err.is_timeout() {
        return TranscriptionError::Timeout;
    }

    let kind = if err.is_connect() {
        "ConnectError"
    } else if err.is_decode() {
        "DecodeError"
    } else if err.is_body() {
        "BodyError"
    } else if err.is_builder() {
        "BuilderError"
    } else if err.is_request() {
        "RequestError"
    } else {
        "HttpError"
    };

    TranscriptionError::Unexpected {
        kind: kind.to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<Transcript, TranscriptionError> {
        let url = self.endpoint();

        let form = multipart::Form::new()
            .text("model", request.model.clone())
            .text("response_format", request.response_format.as_str())
            .part("file", file_part(&request.upload));

        tracing::debug!(model = %request.model, url = %url, "Sending audio to OpenAI transcription API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| classify_request_error(&e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) if e.is_timeout() => return Err(TranscriptionError::Timeout),
                Err(_) => "unknown error".to_string(),
            };
            tracing::warn!(status = status.as_u16(), "OpenAI transcription API returned an error");
            return Err(TranscriptionError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let result: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| classify_request_error(&e))?;
        let text = result.text.unwrap_or_default();

        tracing::info!(chars = text.len(), "OpenAI transcription completed");

        Ok(Transcript::new(text))
    }
}
