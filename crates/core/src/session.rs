//! Listening session: per-list cursors, the sentence pair on screen and the
//! reducer that turns user and host events into side effects.
//!
//! [`SessionState::apply`] never performs I/O. It updates the state and
//! returns the [`Effect`]s a runner must carry out; each effect's completion
//! comes back as another [`Event`].

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{ListLoadError, TranslationError};
use crate::model::{
    ENGLISH_VOICE_TAG, ListKey, ListPhase, ListState, Progress, SOURCE_LANGUAGE, TargetLanguage,
    Utterance, Voice,
};
use crate::voice_selector::{english_voice, resolve_voice};

/// Something that happened: a user action or a completed effect.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    SelectList(ListKey),
    SelectTarget(TargetLanguage),
    /// The host voice catalog changed; carries the full new snapshot.
    VoicesChanged(Vec<Voice>),
    SpeakEnglish,
    SpeakTarget,
    ListLoaded {
        list: ListKey,
        result: Result<ListState, ListLoadError>,
    },
    Translated {
        request_id: u64,
        result: Result<String, TranslationError>,
    },
}

/// Side effect requested by the reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    LoadList(ListKey),
    Translate(TranslationRequest),
    Speak(Utterance),
}

/// Translation of the current sentence, tagged so late responses can be told apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationRequest {
    pub id: u64,
    pub text: String,
    pub source: &'static str,
    pub target: TargetLanguage,
}

/// Last non-fatal failure, shown to the user until it is resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    ListLoadFailed {
        list: ListKey,
        error: ListLoadError,
    },
    TranslationFailed(TranslationError),
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Notice::ListLoadFailed {
                list,
                error: ListLoadError::Empty,
            } => format!("{} list is empty.", list.label()),
            Notice::ListLoadFailed { list, error } => {
                format!("Couldn't load {}: {error}", list.label())
            }
            Notice::TranslationFailed(error) => format!("Couldn't translate: {error}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    lists: BTreeMap<ListKey, ListState>,
    selected: ListKey,
    target: TargetLanguage,
    sentence: Option<String>,
    translation: Option<String>,
    progress: Option<Progress>,
    voices: Vec<Voice>,
    loading: BTreeSet<ListKey>,
    pending_translation: Option<TranslationRequest>,
    next_request_id: u64,
    notice: Option<Notice>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(ListKey::default(), TargetLanguage::default())
    }
}

impl SessionState {
    /// Every list starts empty; nothing is fetched until the first "speak English".
    #[must_use]
    pub fn new(selected: ListKey, target: TargetLanguage) -> Self {
        Self {
            lists: ListKey::ALL
                .into_iter()
                .map(|key| (key, ListState::default()))
                .collect(),
            selected,
            target,
            sentence: None,
            translation: None,
            progress: None,
            voices: Vec::new(),
            loading: BTreeSet::new(),
            pending_translation: None,
            next_request_id: 1,
            notice: None,
        }
    }

    /// Apply one event and return the effects it calls for.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::SelectList(list) => {
                self.selected = list;
                Vec::new()
            }
            Event::SelectTarget(target) => {
                self.target = target;
                self.translation = None;
                self.pending_translation = None;
                Vec::new()
            }
            Event::VoicesChanged(voices) => {
                self.voices = voices;
                Vec::new()
            }
            Event::SpeakEnglish => self.speak_english(),
            Event::SpeakTarget => self.speak_target(),
            Event::ListLoaded { list, result } => {
                self.install_list(list, result);
                Vec::new()
            }
            Event::Translated { request_id, result } => self.finish_translation(request_id, result),
        }
    }

    fn speak_english(&mut self) -> Vec<Effect> {
        let list = self.selected;
        let entry = self.lists.entry(list).or_default();

        // Empty or exhausted: prime the list, speak on the next press.
        let Some(sentence) = entry.advance() else {
            if self.loading.insert(list) {
                return vec![Effect::LoadList(list)];
            }
            return Vec::new();
        };

        self.progress = Some(Progress::new(list, entry.index(), entry.len()));
        self.sentence = Some(sentence.clone());
        self.translation = None;
        self.pending_translation = None;
        self.notice = None;

        let voice = english_voice(&self.voices).cloned();
        vec![Effect::Speak(Utterance::new(
            sentence,
            voice,
            ENGLISH_VOICE_TAG,
        ))]
    }

    fn speak_target(&mut self) -> Vec<Effect> {
        let Some(text) = self.sentence.clone() else {
            return Vec::new();
        };

        let id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        let request = TranslationRequest {
            id,
            text,
            source: SOURCE_LANGUAGE,
            target: self.target,
        };
        self.pending_translation = Some(request.clone());
        vec![Effect::Translate(request)]
    }

    fn install_list(&mut self, list: ListKey, result: Result<ListState, ListLoadError>) {
        self.loading.remove(&list);
        match result {
            Ok(state) if state.phase() != ListPhase::Empty => {
                self.lists.insert(list, state);
                if matches!(self.notice, Some(Notice::ListLoadFailed { list: failed, .. }) if failed == list)
                {
                    self.notice = None;
                }
            }
            Ok(_) => {
                self.notice = Some(Notice::ListLoadFailed {
                    list,
                    error: ListLoadError::Empty,
                });
            }
            Err(error) => {
                self.notice = Some(Notice::ListLoadFailed { list, error });
            }
        }
    }

    fn finish_translation(
        &mut self,
        request_id: u64,
        result: Result<String, TranslationError>,
    ) -> Vec<Effect> {
        let Some(request) = self
            .pending_translation
            .take_if(|pending| pending.id == request_id)
        else {
            return Vec::new();
        };

        match result {
            Ok(text) => {
                self.translation = Some(text.clone());
                if matches!(self.notice, Some(Notice::TranslationFailed(_))) {
                    self.notice = None;
                }
                let tag = request.target.voice_tag();
                let voice = resolve_voice(&self.voices, tag).cloned();
                vec![Effect::Speak(Utterance::new(text, voice, tag))]
            }
            Err(error) => {
                self.translation = None;
                self.notice = Some(Notice::TranslationFailed(error));
                Vec::new()
            }
        }
    }

    #[must_use]
    pub fn selected(&self) -> ListKey {
        self.selected
    }

    #[must_use]
    pub fn target(&self) -> TargetLanguage {
        self.target
    }

    /// The sentence being practiced, also the English text on screen.
    #[must_use]
    pub fn sentence(&self) -> Option<&str> {
        self.sentence.as_deref()
    }

    #[must_use]
    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    #[must_use]
    pub fn progress(&self) -> Option<&Progress> {
        self.progress.as_ref()
    }

    #[must_use]
    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    #[must_use]
    pub fn list(&self, key: ListKey) -> Option<&ListState> {
        self.lists.get(&key)
    }

    #[must_use]
    pub fn list_phase(&self, key: ListKey) -> ListPhase {
        self.lists.get(&key).map_or(ListPhase::Empty, ListState::phase)
    }

    #[must_use]
    pub fn is_loading(&self, key: ListKey) -> bool {
        self.loading.contains(&key)
    }

    #[must_use]
    pub fn is_translating(&self) -> bool {
        self.pending_translation.is_some()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}
