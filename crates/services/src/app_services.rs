use std::sync::Arc;

use reqwest::Client;

use crate::config::ListenConfig;
use crate::error::AppServicesError;
use crate::list_loader::ListLoader;
use crate::playback::PlaybackController;
use crate::sources::{HttpListSource, ListSource};
use crate::speech::SpeechSynth;
use crate::translation::{GoogleTranslator, Translator};

/// Assembles the app-facing playback controller over HTTP collaborators.
#[derive(Clone)]
pub struct AppServices {
    config: ListenConfig,
    playback: Arc<PlaybackController>,
}

impl AppServices {
    /// Build services that reach the configured list and translation endpoints.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Http` if the HTTP client cannot be constructed.
    pub fn new_http(
        config: ListenConfig,
        speech: Arc<dyn SpeechSynth>,
    ) -> Result<Self, AppServicesError> {
        let client = Client::builder()
            .timeout(config.http_timeout())
            .build()?;

        let source: Arc<dyn ListSource> = Arc::new(HttpListSource::new(client.clone()));
        let translator: Arc<dyn Translator> = Arc::new(GoogleTranslator::new(
            client,
            config.translate_url().clone(),
        ));
        let loader = ListLoader::new(config.catalog().clone(), source);
        let playback = Arc::new(PlaybackController::new(loader, translator, speech));

        Ok(Self { config, playback })
    }

    /// Build services over caller-provided collaborators.
    #[must_use]
    pub fn with_parts(
        config: ListenConfig,
        source: Arc<dyn ListSource>,
        translator: Arc<dyn Translator>,
        speech: Arc<dyn SpeechSynth>,
    ) -> Self {
        let loader = ListLoader::new(config.catalog().clone(), source);
        let playback = Arc::new(PlaybackController::new(loader, translator, speech));
        Self { config, playback }
    }

    #[must_use]
    pub fn config(&self) -> &ListenConfig {
        &self.config
    }

    #[must_use]
    pub fn playback(&self) -> Arc<PlaybackController> {
        Arc::clone(&self.playback)
    }
}
