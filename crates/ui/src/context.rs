use std::sync::Arc;

use listen_core::model::{ListKey, TargetLanguage};
use services::PlaybackController;

pub trait UiApp: Send + Sync {
    fn playback(&self) -> Arc<PlaybackController>;

    /// List selected when the window opens.
    fn initial_list(&self) -> ListKey {
        ListKey::default()
    }

    /// Target language selected when the window opens.
    fn initial_target(&self) -> TargetLanguage {
        TargetLanguage::default()
    }
}

#[derive(Clone)]
pub struct AppContext {
    initial_list: ListKey,
    initial_target: TargetLanguage,
    playback: Arc<PlaybackController>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_list: app.initial_list(),
            initial_target: app.initial_target(),
            playback: app.playback(),
        }
    }

    #[must_use]
    pub fn initial_list(&self) -> ListKey {
        self.initial_list
    }

    #[must_use]
    pub fn initial_target(&self) -> TargetLanguage {
        self.initial_target
    }

    #[must_use]
    pub fn playback(&self) -> Arc<PlaybackController> {
        Arc::clone(&self.playback)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
