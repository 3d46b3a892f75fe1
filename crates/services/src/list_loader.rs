use std::sync::Arc;

use listen_core::ListLoadError;
use listen_core::model::{ListCatalog, ListKey, ListState};

use crate::sources::ListSource;

/// Split raw list text into practice items: one per non-blank line, trimmed.
#[must_use]
pub fn parse_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Fetches a practice list and turns it into a freshly shuffled `ListState`.
#[derive(Clone)]
pub struct ListLoader {
    catalog: ListCatalog,
    source: Arc<dyn ListSource>,
}

impl ListLoader {
    #[must_use]
    pub fn new(catalog: ListCatalog, source: Arc<dyn ListSource>) -> Self {
        Self { catalog, source }
    }

    #[must_use]
    pub fn catalog(&self) -> &ListCatalog {
        &self.catalog
    }

    /// Load `key` from its source. Every call reshuffles.
    ///
    /// # Errors
    ///
    /// Returns `ListLoadError` when the fetch fails or the text has no items.
    pub async fn load(&self, key: ListKey) -> Result<ListState, ListLoadError> {
        let list = self.catalog.get(key);
        tracing::debug!(list = %key, source = %list.source(), "loading practice list");

        let text = self.source.fetch_text(list).await.inspect_err(|err| {
            tracing::warn!(list = %key, error = %err, "practice list fetch failed");
        })?;

        let items = parse_items(&text);
        if items.is_empty() {
            tracing::warn!(list = %key, "practice list has no items");
            return Err(ListLoadError::Empty);
        }

        tracing::info!(list = %key, items = items.len(), "practice list loaded");
        Ok(ListState::new(items))
    }
}
