use serde::{Deserialize, Serialize};

/// Rate applied to every utterance, relative to the engine's normal speed.
pub const SPEECH_RATE: f32 = 0.95;

/// Tag English sentences are spoken with.
pub const ENGLISH_VOICE_TAG: &str = "en-GB";

/// Language sentences are translated from.
pub const SOURCE_LANGUAGE: &str = "en";

/// Snapshot of one voice offered by the host speech engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
    #[serde(default, rename = "default")]
    pub is_default: bool,
}

impl Voice {
    #[must_use]
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            is_default: false,
        }
    }
}

/// One unit of text handed to the speech engine.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<Voice>,
    pub lang: String,
    pub rate: f32,
}

impl Utterance {
    /// Utterance at the standard practice rate.
    #[must_use]
    pub fn new(text: impl Into<String>, voice: Option<Voice>, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice,
            lang: lang.into(),
            rate: SPEECH_RATE,
        }
    }
}
