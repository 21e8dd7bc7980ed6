use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3003;
pub const DEFAULT_REGION: &str = "uksouth";
pub const DEFAULT_VOICE: &str = "en-US-JennyNeural";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_OUTPUT_FORMAT: &str = "riff-16khz-16bit-mono-pcm";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    NotANumber { name: &'static str, value: String },

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),
}

/// Settings read once at startup and shared read-only with every request.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub subscription_key: String,
    pub endpoint: String,
    pub voice: String,
    pub language: String,
    pub output_format: String,
    pub timeout: Option<Duration>,
}

// The key stays out of logs and panics.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("subscription_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("voice", &self.voice)
            .field("language", &self.language)
            .field("output_format", &self.output_format)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::NotANumber { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let timeout = match lookup("TTS_TIMEOUT_SECS") {
            Some(value) => {
                let secs: u64 = value.trim().parse().map_err(|_| ConfigError::NotANumber {
                    name: "TTS_TIMEOUT_SECS",
                    value,
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let region = var("AZURE_SPEECH_REGION", DEFAULT_REGION);
        let endpoint = lookup("TTS_ENDPOINT").unwrap_or_else(|| endpoint_for_region(&region));

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            subscription_key: var("AZURE_SPEECH_KEY", ""),
            endpoint,
            voice: var("TTS_VOICE", DEFAULT_VOICE),
            language: var("TTS_LANGUAGE", DEFAULT_LANGUAGE),
            output_format: var("TTS_OUTPUT_FORMAT", DEFAULT_OUTPUT_FORMAT),
            timeout,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

/// Speech synthesis REST endpoint for an Azure region.
pub fn endpoint_for_region(region: &str) -> String {
    format!(
        "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
        region
    )
}
