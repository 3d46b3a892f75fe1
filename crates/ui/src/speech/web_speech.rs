use async_trait::async_trait;
use dioxus::document::eval;
use dioxus::prelude::*;
use listen_core::model::{Utterance, Voice};
use services::{SpeechError, SpeechSynth};

use super::scripts::{speak_script, voice_catalog_script};

/// Speech through the webview's `speechSynthesis`.
///
/// Must be driven from tasks spawned on the Dioxus runtime, since each
/// utterance is delivered as a document script.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebSpeech;

impl WebSpeech {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechSynth for WebSpeech {
    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        let js = speak_script(utterance).map_err(|e| SpeechError::Rejected(e.to_string()))?;
        // The engine queues utterances itself; no completion is awaited.
        let _ = eval(&js);
        Ok(())
    }
}

/// Stream the host voice catalog into `on_change` for the lifetime of the
/// calling component.
pub fn use_voice_catalog(on_change: Callback<Vec<Voice>>) {
    use_future(move || async move {
        let mut catalog = eval(voice_catalog_script());
        loop {
            match catalog.recv::<Vec<Voice>>().await {
                Ok(voices) => {
                    tracing::debug!(count = voices.len(), "voice catalog changed");
                    on_change.call(voices);
                }
                Err(err) => {
                    tracing::debug!(error = ?err, "voice catalog unavailable");
                    break;
                }
            }
        }
    });
}
