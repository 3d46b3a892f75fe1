use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::CatalogError;

/// Published CSV export of the sentence list.
pub const DEFAULT_SENTENCES_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRbZ6UWGUng68JOm5sp82l8EY32fmvkwRsnmGRtIYzd1mBL6Z-Njq3ZdQuhd_XzHYcv2dTlVdikk0Lg/pub?output=csv";

/// Published CSV export of the verb list.
pub const DEFAULT_VERBS_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR6CYwZKRmNqr3LXHnJAiDv0Q3nktIVN1mH-wVIVFQLLYde6EyXDIyJymA1H4k_hUCqA2W61wjc6nh9/pub?output=csv";

/// Identity of a selectable practice list.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ListKey {
    #[default]
    Sentences,
    Verbs,
}

impl ListKey {
    pub const ALL: [ListKey; 2] = [ListKey::Sentences, ListKey::Verbs];

    /// Stable key used in selectors, flags and environment variables.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ListKey::Sentences => "sentences",
            ListKey::Verbs => "verbs",
        }
    }

    /// Human label shown in the selector and the progress line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ListKey::Sentences => "Sentences",
            ListKey::Verbs => "Verbs",
        }
    }
}

impl fmt::Display for ListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ListKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogError::UnknownList(s.to_string()))
    }
}

/// A practice list and where its rows come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeList {
    key: ListKey,
    source: Url,
}

impl PracticeList {
    #[must_use]
    pub fn new(key: ListKey, source: Url) -> Self {
        Self { key, source }
    }

    #[must_use]
    pub fn key(&self) -> ListKey {
        self.key
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.key.label()
    }

    #[must_use]
    pub fn source(&self) -> &Url {
        &self.source
    }
}

/// Static configuration of every practice list, fixed for the process lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListCatalog {
    sentences: PracticeList,
    verbs: PracticeList,
}

impl ListCatalog {
    #[must_use]
    pub fn new(sentences: Url, verbs: Url) -> Self {
        Self {
            sentences: PracticeList::new(ListKey::Sentences, sentences),
            verbs: PracticeList::new(ListKey::Verbs, verbs),
        }
    }

    #[must_use]
    pub fn get(&self, key: ListKey) -> &PracticeList {
        match key {
            ListKey::Sentences => &self.sentences,
            ListKey::Verbs => &self.verbs,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PracticeList> {
        [&self.sentences, &self.verbs].into_iter()
    }
}
