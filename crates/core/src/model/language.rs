use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::voice_selector::bare_language;

/// A language the current sentence can be translated into and spoken in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetLanguage {
    label: &'static str,
    voice_tag: &'static str,
}

impl TargetLanguage {
    pub const SPANISH: Self = Self::new("Spanish", "es-ES");
    pub const FRENCH: Self = Self::new("French", "fr-FR");
    pub const GERMAN: Self = Self::new("German", "de-DE");
    pub const ITALIAN: Self = Self::new("Italian", "it-IT");
    pub const RUSSIAN: Self = Self::new("Russian", "ru-RU");

    /// Selector order.
    pub const ALL: [Self; 5] = [
        Self::SPANISH,
        Self::FRENCH,
        Self::GERMAN,
        Self::ITALIAN,
        Self::RUSSIAN,
    ];

    const fn new(label: &'static str, voice_tag: &'static str) -> Self {
        Self { label, voice_tag }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.label
    }

    /// Full voice tag, e.g. `es-ES`.
    #[must_use]
    pub fn voice_tag(self) -> &'static str {
        self.voice_tag
    }

    /// Bare language code sent to the translation endpoint, e.g. `es`.
    #[must_use]
    pub fn code(self) -> &'static str {
        bare_language(self.voice_tag)
    }

    /// Resolve one of the supported languages from its voice tag or bare code.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownLanguage` for anything outside the fixed set.
    pub fn from_voice_tag(tag: &str) -> Result<Self, CatalogError> {
        let trimmed = tag.trim();
        Self::ALL
            .into_iter()
            .find(|lang| {
                lang.voice_tag.eq_ignore_ascii_case(trimmed)
                    || lang.code().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| CatalogError::UnknownLanguage(tag.to_string()))
    }
}

impl Default for TargetLanguage {
    fn default() -> Self {
        Self::SPANISH
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.voice_tag)
    }
}

impl FromStr for TargetLanguage {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_voice_tag(s)
    }
}
