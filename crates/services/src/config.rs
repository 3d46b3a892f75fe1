use std::env;
use std::time::Duration;

use listen_core::model::{DEFAULT_SENTENCES_URL, DEFAULT_VERBS_URL, ListCatalog};
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(15);

pub const SENTENCES_URL_VAR: &str = "LISTEN_SENTENCES_URL";
pub const VERBS_URL_VAR: &str = "LISTEN_VERBS_URL";
pub const TRANSLATE_URL_VAR: &str = "LISTEN_TRANSLATE_URL";
pub const HTTP_TIMEOUT_VAR: &str = "LISTEN_HTTP_TIMEOUT_SECS";

/// Remote endpoints and HTTP knobs, resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenConfig {
    catalog: ListCatalog,
    translate_url: Url,
    http_timeout: Duration,
}

impl ListenConfig {
    /// Read overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Resolve configuration through `lookup`; unset or blank variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` for URLs that do not parse or are not http(s).
    /// Returns `ConfigError::InvalidTimeout` for a zero or non-numeric timeout.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let sentences = url_var(&lookup, SENTENCES_URL_VAR, DEFAULT_SENTENCES_URL)?;
        let verbs = url_var(&lookup, VERBS_URL_VAR, DEFAULT_VERBS_URL)?;
        let translate_url = url_var(&lookup, TRANSLATE_URL_VAR, DEFAULT_TRANSLATE_URL)?;

        let http_timeout = match non_blank(&lookup, HTTP_TIMEOUT_VAR) {
            None => DEFAULT_HTTP_TIMEOUT,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: HTTP_TIMEOUT_VAR,
                        raw,
                    });
                }
            },
        };

        Ok(Self {
            catalog: ListCatalog::new(sentences, verbs),
            translate_url,
            http_timeout,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &ListCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn translate_url(&self) -> &Url {
        &self.translate_url
    }

    #[must_use]
    pub fn http_timeout(&self) -> Duration {
        self.http_timeout
    }
}

fn non_blank(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Option<String> {
    lookup(var)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn url_var(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
) -> Result<Url, ConfigError> {
    let raw = non_blank(lookup, var).unwrap_or_else(|| default.to_string());
    let invalid = || ConfigError::InvalidUrl {
        var,
        raw: raw.clone(),
    };
    let url = Url::parse(&raw).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(url)
}
