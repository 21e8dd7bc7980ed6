pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

/// Inbound body of `POST /tts`. Any other keys are ignored.
#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechResponse {
    /// Base64 (standard alphabet, padded) of the audio returned upstream.
    pub speech: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
