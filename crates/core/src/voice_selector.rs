//! Picks a voice from the host catalog snapshot.

use crate::model::{ENGLISH_VOICE_TAG, Voice};

/// Language part of a tag: `"es-ES"` -> `"es"`.
#[must_use]
pub fn bare_language(tag: &str) -> &str {
    tag.split_once('-').map_or(tag, |(language, _)| language)
}

/// Exact tag, then bare-language prefix, then the first voice.
#[must_use]
pub fn resolve_voice<'a>(voices: &'a [Voice], tag: &str) -> Option<&'a Voice> {
    let language = bare_language(tag);
    voices
        .iter()
        .find(|voice| voice.lang == tag)
        .or_else(|| voices.iter().find(|voice| voice.lang.starts_with(language)))
        .or_else(|| voices.first())
}

/// First British English voice, else the first voice.
#[must_use]
pub fn english_voice(voices: &[Voice]) -> Option<&Voice> {
    voices
        .iter()
        .find(|voice| voice.lang.starts_with(ENGLISH_VOICE_TAG))
        .or_else(|| voices.first())
}
