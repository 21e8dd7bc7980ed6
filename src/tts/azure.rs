use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::config::Config;
use crate::error::AppError;

pub const SSML_CONTENT_TYPE: &str = "application/ssml+xml";
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";

/// Client for the Azure Speech `cognitiveservices/v1` synthesis endpoint.
pub struct AzureSpeech {
    client: Client,
    endpoint: String,
    subscription_key: String,
    output_format: String,
}

impl AzureSpeech {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
            subscription_key: config.subscription_key.clone(),
            output_format: config.output_format.clone(),
        })
    }

    /// POST an SSML document and return the raw audio body.
    pub async fn synthesize(&self, ssml: String) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, SSML_CONTENT_TYPE)
            .header(SUBSCRIPTION_KEY_HEADER, &self.subscription_key)
            .header(OUTPUT_FORMAT_HEADER, &self.output_format)
            .body(ssml)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamRejected(status));
        }

        let audio = response.bytes().await?;
        tracing::debug!("Received {} bytes of audio", audio.len());

        Ok(audio.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use mockito::Matcher;

    fn config_for(endpoint: String) -> Config {
        Config::from_lookup(|name| match name {
            "TTS_ENDPOINT" => Some(endpoint.clone()),
            "AZURE_SPEECH_KEY" => Some("test-key".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_sends_provider_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/cognitiveservices/v1")
            .match_header("content-type", "application/ssml+xml")
            .match_header("ocp-apim-subscription-key", "test-key")
            .match_header("x-microsoft-outputformat", "riff-16khz-16bit-mono-pcm")
            .match_body(Matcher::Exact("<speak/>".to_string()))
            .with_status(200)
            .with_body(b"RIFFdata")
            .create_async()
            .await;

        let engine =
            AzureSpeech::new(&config_for(format!("{}/cognitiveservices/v1", server.url()))).unwrap();
        let audio = engine.synthesize("<speak/>".to_string()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(audio, b"RIFFdata");
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejection() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_status(401)
            .create_async()
            .await;

        let engine = AzureSpeech::new(&config_for(server.url())).unwrap();
        let err = engine.synthesize("<speak/>".to_string()).await.unwrap_err();

        mock.assert_async().await;
        match err {
            AppError::UpstreamRejected(status) => assert_eq!(status, StatusCode::UNAUTHORIZED),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let engine = AzureSpeech::new(&config_for("http://127.0.0.1:1/".to_string())).unwrap();
        let err = engine.synthesize("<speak/>".to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
