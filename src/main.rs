use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod ssml;
mod tts;

use api::routes::{create_router, AppState};
use config::Config;
use tts::TtsService;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let config = Config::from_env().expect("Invalid configuration");
    let addr = config.bind_addr().expect("Invalid address");

    tracing::info!("Azure TTS Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Speech endpoint: {}", config.endpoint);

    // Create TTS service
    let tts = TtsService::new(&config).expect("Failed to build HTTP client");
    tracing::info!("Voice: {} ({})", tts.voice(), config.language);

    // Create app state
    let state = Arc::new(AppState { tts });

    // Create router
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
