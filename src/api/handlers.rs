use axum::{body::Bytes, extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::sync::Arc;

use super::{HealthResponse, SpeechResponse, TtsRequest};
use crate::api::routes::AppState;
use crate::error::AppError;

pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SpeechResponse>, AppError> {
    // Decode by hand so every malformed body is a 400, whatever the content type
    let request: TtsRequest = serde_json::from_slice(&body)?;

    let text = match request.text {
        Some(text) if !text.is_empty() => text,
        Some(_) => return Err(AppError::BadRequest("Text cannot be empty".into())),
        None => return Err(AppError::BadRequest("Missing 'text' field".into())),
    };

    tracing::debug!("Synthesizing {} chars", text.chars().count());

    let audio = state.tts.speak(&text).await?;

    Ok(Json(SpeechResponse {
        speech: STANDARD.encode(&audio),
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
