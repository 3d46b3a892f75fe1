mod scripts;
mod web_speech;

pub use web_speech::{WebSpeech, use_voice_catalog};
