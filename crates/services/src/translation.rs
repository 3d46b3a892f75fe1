use async_trait::async_trait;
use listen_core::TranslationError;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::HttpError;

/// Remote translation of a single sentence.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` into `target` (bare language codes).
    ///
    /// # Errors
    ///
    /// Returns `TranslationError` for transport failures or unexpected responses.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError>;
}

/// Client for the public `translate_a/single` endpoint.
#[derive(Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: Url,
}

impl GoogleTranslator {
    #[must_use]
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch(&self, query: &TranslateQuery<'_>) -> Result<Value, HttpError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(HttpError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        let query = TranslateQuery {
            client: "gtx",
            sl: source,
            tl: target,
            dt: "t",
            q: text,
        };
        let body = self.fetch(&query).await?;
        parse_translation(&body)
    }
}

#[derive(Debug, Serialize)]
struct TranslateQuery<'a> {
    client: &'static str,
    sl: &'a str,
    tl: &'a str,
    dt: &'static str,
    q: &'a str,
}

/// Reassemble the translated text from a `[[[chunk, original, ...], ...], ...]` body.
///
/// Chunks whose head is `null` contribute nothing.
///
/// # Errors
///
/// Returns `TranslationError::Malformed` when the body does not have that shape.
pub fn parse_translation(body: &Value) -> Result<String, TranslationError> {
    let chunks = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::Malformed("missing sentence array".to_string()))?;

    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        let head = chunk
            .as_array()
            .and_then(|parts| parts.first())
            .ok_or_else(|| TranslationError::Malformed(format!("chunk {i} is not an array")))?;
        match head {
            Value::String(text) => out.push_str(text),
            Value::Null => {}
            _ => {
                return Err(TranslationError::Malformed(format!(
                    "chunk {i} has a non-text head"
                )));
            }
        }
    }
    Ok(out)
}
