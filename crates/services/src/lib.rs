#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod list_loader;
pub mod playback;
pub mod sources;
pub mod speech;
pub mod translation;

pub use app_services::AppServices;
pub use config::ListenConfig;
pub use error::{AppServicesError, ConfigError, HttpError, SpeechError};
pub use list_loader::{ListLoader, parse_items};
pub use playback::PlaybackController;
pub use sources::{HttpListSource, InMemoryListSource, ListSource};
pub use speech::{RecordingSpeech, SpeechSynth};
pub use translation::{GoogleTranslator, Translator, parse_translation};
