use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use hushscribe::application::services::TranscriptionService;
use hushscribe::infrastructure::audio::OpenAiWhisperEngine;
use hushscribe::infrastructure::observability::{TracingConfig, init_tracing};
use hushscribe::infrastructure::text_processing::PatternRedactor;
use hushscribe::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(&TracingConfig::default());

    let settings = Settings::from_env().context("Failed to load settings")?;
    let transcription = &settings.transcription;

    let engine = OpenAiWhisperEngine::new(
        transcription.api_key.clone(),
        transcription.base_url.clone(),
        transcription.timeout,
    )
    .context("Failed to build transcription client")?;

    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::new(engine),
        Arc::new(PatternRedactor::default()),
        transcription.model.clone(),
    ));

    let state = AppState {
        transcription_service,
        max_upload_bytes: transcription.max_upload_bytes,
    };

    let router = create_router(state);

    let addr = settings.server.socket_addr();
    tracing::info!(
        addr = %addr,
        model = %transcription.model,
        timeout_secs = transcription.timeout.as_secs(),
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
