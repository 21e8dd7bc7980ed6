pub mod azure;

use crate::config::Config;
use crate::error::AppError;
use crate::ssml::SpeakDocument;

pub use azure::AzureSpeech;

pub struct TtsService {
    engine: AzureSpeech,
    voice: String,
    language: String,
}

impl TtsService {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        if config.subscription_key.is_empty() {
            tracing::warn!("AZURE_SPEECH_KEY is not set; synthesis requests will be rejected upstream");
        }

        Ok(Self {
            engine: AzureSpeech::new(config)?,
            voice: config.voice.clone(),
            language: config.language.clone(),
        })
    }

    pub async fn speak(&self, text: &str) -> Result<Vec<u8>, AppError> {
        // 1. Wrap text in SSML
        let ssml = SpeakDocument::new(text, &self.voice, &self.language).to_xml();

        // 2. Synthesize
        let audio = self.engine.synthesize(ssml).await?;

        Ok(audio)
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_speak_posts_configured_voice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"<speak version="1.0" xml:lang="en-GB">"#.to_string()),
                Matcher::Regex(
                    r#"<voice xml:lang="en-GB" name="en-GB-SoniaNeural">Fish &amp; chips</voice>"#
                        .to_string(),
                ),
            ]))
            .with_status(200)
            .with_body(vec![1u8, 2, 3])
            .create_async()
            .await;

        let url = server.url();
        let config = Config::from_lookup(|name| match name {
            "TTS_ENDPOINT" => Some(url.clone()),
            "TTS_VOICE" => Some("en-GB-SoniaNeural".to_string()),
            "TTS_LANGUAGE" => Some("en-GB".to_string()),
            _ => None,
        })
        .unwrap();

        let tts = TtsService::new(&config).unwrap();
        assert_eq!(tts.voice(), "en-GB-SoniaNeural");

        let audio = tts.speak("Fish & chips").await.unwrap();

        mock.assert_async().await;
        assert_eq!(audio, vec![1u8, 2, 3]);
    }
}
