//! Catalog sources.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::client::{FetchError, HttpSource};

/// Somewhere the catalog CSV text can be fetched from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the whole catalog export as text.
    async fn fetch_text(&self) -> Result<String, FetchError>;

    /// Human-readable location, for logs and CLI output.
    fn describe(&self) -> String;
}

/// Catalog read from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch_text(&self) -> Result<String, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| FetchError::Io(format!("{}: {e}", self.path.display())))?;
        String::from_utf8(bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A source location as given on the command line or in config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    Url(String),
    Path(PathBuf),
}

impl SourceSpec {
    /// `http://` and `https://` locations are URLs, anything else is a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            SourceSpec::Url(trimmed.to_string())
        } else {
            SourceSpec::Path(PathBuf::from(trimmed))
        }
    }

    /// Build the source. `cache_bust` only applies to URLs.
    pub fn into_source(self, cache_bust: bool) -> Result<Box<dyn CatalogSource>, FetchError> {
        match self {
            SourceSpec::Url(url) => Ok(Box::new(HttpSource::new(&url)?.with_cache_bust(cache_bust))),
            SourceSpec::Path(path) => Ok(Box::new(FileSource::new(path))),
        }
    }
}
