//! Dictionary loading over HTTP.

use crate::i18n::{Dictionary, Language};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Recoverable failure to obtain a dictionary. The page stays untranslated.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid dictionary URL '{path}': {source}")]
    InvalidUrl {
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to load {url}: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to load {url}: HTTP {status}")]
    Status { url: Url, status: u16 },
    #[error("Failed to parse dictionary at {url}: {source}")]
    Body {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}

/// Build the dictionary location for a language.
///
/// The path is `<prefix>/locales/<code>/common.json`, resolved against the
/// page URL so an empty or relative prefix behaves like a browser fetch.
pub fn dictionary_url(page_url: &Url, prefix: &str, language: Language) -> Result<Url, LoadError> {
    let path = format!("{}/locales/{}/common.json", prefix, language.code());
    page_url
        .join(&path)
        .map_err(|source| LoadError::InvalidUrl { path, source })
}

/// Anything able to produce a dictionary for a URL.
#[allow(async_fn_in_trait)]
pub trait DictionarySource {
    async fn load(&self, url: &Url) -> Result<Dictionary, LoadError>;
}

/// Fetches dictionaries with a `no-store` cache policy so edits show up
/// immediately.
#[derive(Debug, Clone, Default)]
pub struct HttpDictionaryLoader {
    client: reqwest::Client,
}

impl HttpDictionaryLoader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl DictionarySource for HttpDictionaryLoader {
    async fn load(&self, url: &Url) -> Result<Dictionary, LoadError> {
        debug!("Fetching dictionary from {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|source| LoadError::Request {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(LoadError::Status {
                url: url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| LoadError::Request {
            url: url.clone(),
            source,
        })?;

        Dictionary::from_json(&body).map_err(|source| LoadError::Body {
            url: url.clone(),
            source,
        })
    }
}
