//! HTTP fetch of the published catalog export.

use async_trait::async_trait;
use reqwest::Url;

use crate::source::CatalogSource;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Read error: {0}")]
    Io(String),

    #[error("Body is not valid UTF-8: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Connection(err.to_string())
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err.to_string())
    }
}

/// Catalog served over HTTP, typically a spreadsheet published as CSV.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
    cache_bust: bool,
}

impl HttpSource {
    /// Create a source for `url`. Cache busting is on by default.
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self {
            client: reqwest::Client::new(),
            url,
            cache_bust: true,
        })
    }

    /// Toggle the `_=<unix millis>` query parameter.
    pub fn with_cache_bust(mut self, enabled: bool) -> Self {
        self.cache_bust = enabled;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The URL actually requested for a fetch at `millis`.
    pub fn request_url(&self, millis: i64) -> Url {
        let mut url = self.url.clone();
        if self.cache_bust {
            url.query_pairs_mut().append_pair("_", &millis.to_string());
        }
        url
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch_text(&self) -> Result<String, FetchError> {
        let url = self.request_url(chrono::Utc::now().timestamp_millis());
        tracing::debug!(url = %url, "fetching catalog");

        let resp = self.client.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(resp.text().await?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
