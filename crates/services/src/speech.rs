use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use listen_core::model::Utterance;

use crate::error::SpeechError;

/// Host speech-synthesis capability.
///
/// Queuing and interruption of overlapping utterances are left to the engine.
#[async_trait]
pub trait SpeechSynth: Send + Sync {
    /// Enqueue `utterance` for playback.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the engine cannot accept the utterance.
    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;
}

/// Speech engine that records utterances instead of playing them.
///
/// Backs tests and headless runs.
#[derive(Clone, Default)]
pub struct RecordingSpeech {
    spoken: Arc<Mutex<Vec<Utterance>>>,
    failure: Option<SpeechError>,
}

impl RecordingSpeech {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that rejects every utterance with `error`.
    #[must_use]
    pub fn failing(error: SpeechError) -> Self {
        Self {
            spoken: Arc::default(),
            failure: Some(error),
        }
    }

    /// Utterances accepted so far, oldest first.
    #[must_use]
    pub fn spoken(&self) -> Vec<Utterance> {
        self.spoken
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn spoken_texts(&self) -> Vec<String> {
        self.spoken().into_iter().map(|u| u.text).collect()
    }
}

#[async_trait]
impl SpeechSynth for RecordingSpeech {
    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.spoken
            .lock()
            .map_err(|e| SpeechError::Rejected(e.to_string()))?
            .push(utterance.clone());
        Ok(())
    }
}
