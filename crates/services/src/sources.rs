use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use listen_core::ListLoadError;
use listen_core::model::{ListKey, PracticeList};
use reqwest::Client;

use crate::error::HttpError;

/// Where practice list text comes from.
#[async_trait]
pub trait ListSource: Send + Sync {
    /// Fetch the raw text of a list.
    ///
    /// # Errors
    ///
    /// Returns `ListLoadError` if the text cannot be retrieved.
    async fn fetch_text(&self, list: &PracticeList) -> Result<String, ListLoadError>;
}

/// Fetches each list from its configured URL.
#[derive(Clone)]
pub struct HttpListSource {
    client: Client,
}

impl HttpListSource {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn get_text(&self, list: &PracticeList) -> Result<String, HttpError> {
        let response = self.client.get(list.source().clone()).send().await?;
        if !response.status().is_success() {
            return Err(HttpError::Status(response.status()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl ListSource for HttpListSource {
    async fn fetch_text(&self, list: &PracticeList) -> Result<String, ListLoadError> {
        Ok(self.get_text(list).await?)
    }
}

/// In-memory list source for testing and prototyping.
///
/// Lists without an entry fail as if the request had come back 404.
#[derive(Clone, Default)]
pub struct InMemoryListSource {
    texts: Arc<Mutex<HashMap<ListKey, Result<String, ListLoadError>>>>,
    fetches: Arc<Mutex<Vec<ListKey>>>,
}

impl InMemoryListSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `text` for `list` from now on.
    #[must_use]
    pub fn with_text(self, list: ListKey, text: impl Into<String>) -> Self {
        self.set(list, Ok(text.into()));
        self
    }

    /// Fail every fetch of `list` with `error` from now on.
    #[must_use]
    pub fn with_error(self, list: ListKey, error: ListLoadError) -> Self {
        self.set(list, Err(error));
        self
    }

    pub fn set(&self, list: ListKey, response: Result<String, ListLoadError>) {
        if let Ok(mut guard) = self.texts.lock() {
            guard.insert(list, response);
        }
    }

    /// Lists fetched so far, in call order.
    #[must_use]
    pub fn fetches(&self) -> Vec<ListKey> {
        self.fetches
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ListSource for InMemoryListSource {
    async fn fetch_text(&self, list: &PracticeList) -> Result<String, ListLoadError> {
        self.fetches
            .lock()
            .map_err(|e| ListLoadError::Fetch(e.to_string()))?
            .push(list.key());
        let guard = self
            .texts
            .lock()
            .map_err(|e| ListLoadError::Fetch(e.to_string()))?;
        guard
            .get(&list.key())
            .cloned()
            .unwrap_or(Err(ListLoadError::Status(404)))
    }
}
