pub mod escape;

pub use escape::escape;

pub const SSML_VERSION: &str = "1.0";

/// A `<speak>` document with a single `<voice>` child, the shape Azure
/// expects for one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakDocument {
    pub version: String,
    pub language: String,
    pub voice: VoiceElement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoiceElement {
    pub language: String,
    pub name: String,
    pub text: String,
}

impl SpeakDocument {
    pub fn new(text: &str, voice_name: &str, language: &str) -> Self {
        Self {
            version: SSML_VERSION.to_string(),
            language: language.to_string(),
            voice: VoiceElement {
                language: language.to_string(),
                name: voice_name.to_string(),
                text: text.to_string(),
            },
        }
    }

    /// Render as indented XML. Text and attribute values are escaped.
    pub fn to_xml(&self) -> String {
        format!(
            "<speak version=\"{}\" xml:lang=\"{}\">\n  <voice xml:lang=\"{}\" name=\"{}\">{}</voice>\n</speak>",
            escape(&self.version),
            escape(&self.language),
            escape(&self.voice.language),
            escape(&self.voice.name),
            escape(&self.voice.text),
        )
    }
}
