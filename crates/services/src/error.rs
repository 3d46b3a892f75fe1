//! Shared error types for the services crate.

use thiserror::Error;

use listen_core::{ListLoadError, TranslationError};

/// Transport-level failure talking to a remote endpoint.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HttpError {
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl From<HttpError> for ListLoadError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Status(status) => ListLoadError::Status(status.as_u16()),
            HttpError::Http(err) => ListLoadError::Fetch(err.to_string()),
        }
    }
}

impl From<HttpError> for TranslationError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Status(status) => TranslationError::Status(status.as_u16()),
            HttpError::Http(err) if err.is_decode() => TranslationError::Malformed(err.to_string()),
            HttpError::Http(err) => TranslationError::Request(err.to_string()),
        }
    }
}

/// Errors emitted by a `SpeechSynth`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SpeechError {
    #[error("speech engine is unavailable")]
    Unavailable,
    #[error("speech engine rejected the utterance: {0}")]
    Rejected(String),
}

/// Errors emitted while reading `ListenConfig`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {raw}")]
    InvalidUrl { var: &'static str, raw: String },
    #[error("{var} must be a positive number of seconds: {raw}")]
    InvalidTimeout { var: &'static str, raw: String },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
