//! Where catalog JSON comes from.
//!
//! A [`CatalogSource`] yields the raw document text; parsing happens in
//! [`crate::load`]. Local paths use [`FileSource`], `http(s)://` locations
//! use [`HttpSource`].

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::LoadError;

/// A place a catalog document can be fetched from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw document text.
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Human-readable location for logs.
    fn describe(&self) -> String;
}

/// Build the right source for a path or URL.
pub fn source_for(location: &str, timeout: Duration) -> Result<Box<dyn CatalogSource>, LoadError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location.to_string(), timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

// ---------------------------------------------------------------------------
// File
// ---------------------------------------------------------------------------

/// A catalog document on the local filesystem.
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
    async fn fetch(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// A catalog document served over HTTP.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Create a source with its own client and request timeout.
    pub fn new(url: String, timeout: Duration) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url))
    }

    /// Create a source reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LoadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
