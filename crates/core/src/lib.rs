#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod shuffle;
pub mod voice_selector;

pub use error::{CatalogError, ListLoadError, ListStateError, TranslationError};
pub use session::{Effect, Event, Notice, SessionState, TranslationRequest};
