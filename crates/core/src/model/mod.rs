mod catalog;
mod language;
mod list_state;
mod progress;
mod voice;

pub use catalog::{DEFAULT_SENTENCES_URL, DEFAULT_VERBS_URL, ListCatalog, ListKey, PracticeList};
pub use language::TargetLanguage;
pub use list_state::{ListPhase, ListState};
pub use progress::Progress;
pub use voice::{ENGLISH_VOICE_TAG, SOURCE_LANGUAGE, SPEECH_RATE, Utterance, Voice};
