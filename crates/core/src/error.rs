use thiserror::Error;

/// Failure to produce a usable list from its source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ListLoadError {
    #[error("list request failed: {0}")]
    Fetch(String),

    #[error("list request returned status {0}")]
    Status(u16),

    #[error("list has no items")]
    Empty,
}

/// Failure to obtain a translation for the current sentence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Request(String),

    #[error("translation request returned status {0}")]
    Status(u16),

    #[error("unexpected translation response: {0}")]
    Malformed(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("unknown practice list: {0}")]
    UnknownList(String),

    #[error("unsupported target language: {0}")]
    UnknownLanguage(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ListStateError {
    #[error("shuffled order has {shuffled} items but the list has {items}")]
    LengthMismatch { items: usize, shuffled: usize },

    #[error("cursor {index} is past the end of a {len}-item list")]
    CursorOutOfRange { index: usize, len: usize },
}
