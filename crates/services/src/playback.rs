use std::collections::VecDeque;
use std::sync::Arc;

use listen_core::{Effect, Event, SessionState, TranslationRequest};

use crate::list_loader::ListLoader;
use crate::speech::SpeechSynth;
use crate::translation::Translator;

/// Carries out the effects a `SessionState` asks for.
///
/// Each effect that completes asynchronously reports back as an `Event`;
/// failures are folded into that event so nothing here is fatal.
#[derive(Clone)]
pub struct PlaybackController {
    loader: ListLoader,
    translator: Arc<dyn Translator>,
    speech: Arc<dyn SpeechSynth>,
}

impl PlaybackController {
    #[must_use]
    pub fn new(
        loader: ListLoader,
        translator: Arc<dyn Translator>,
        speech: Arc<dyn SpeechSynth>,
    ) -> Self {
        Self {
            loader,
            translator,
            speech,
        }
    }

    #[must_use]
    pub fn loader(&self) -> &ListLoader {
        &self.loader
    }

    /// Perform one effect, returning the event that reports its outcome.
    pub async fn perform(&self, effect: Effect) -> Option<Event> {
        match effect {
            Effect::LoadList(list) => {
                let result = self.loader.load(list).await;
                Some(Event::ListLoaded { list, result })
            }
            Effect::Translate(request) => Some(self.translate(request).await),
            Effect::Speak(utterance) => {
                if let Err(err) = self.speech.speak(&utterance).await {
                    tracing::warn!(lang = %utterance.lang, error = %err, "utterance was not spoken");
                }
                None
            }
        }
    }

    async fn translate(&self, request: TranslationRequest) -> Event {
        let TranslationRequest {
            id,
            text,
            source,
            target,
        } = request;
        let result = self
            .translator
            .translate(&text, source, target.code())
            .await;
        if let Err(err) = &result {
            tracing::warn!(target_lang = target.code(), error = %err, "translation failed");
        }
        Event::Translated {
            request_id: id,
            result,
        }
    }

    /// Apply `event` and run every resulting effect to completion, in order.
    ///
    /// Used where there is no UI loop to interleave with (tests, headless runs).
    pub async fn dispatch(&self, session: &mut SessionState, event: Event) {
        let mut effects: VecDeque<Effect> = session.apply(event).into();
        while let Some(effect) = effects.pop_front() {
            if let Some(follow_up) = self.perform(effect).await {
                effects.extend(session.apply(follow_up));
            }
        }
    }
}
