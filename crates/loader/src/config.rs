use std::time::Duration;

use tokio::sync::mpsc;

use crate::debounce::{SearchDebouncer, DEFAULT_SEARCH_DEBOUNCE};
use crate::error::LoadError;
use crate::source::{source_for, CatalogSource};

/// Default catalog location, relative to the site root.
pub const DEFAULT_CATALOG_LOCATION: &str = "data/gallery.json";

/// Default HTTP fetch timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Catalog loading configuration.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// File path or `http(s)://` URL of the catalog document.
    pub catalog_location: String,
    /// Delay before a typed search fires.
    pub search_debounce: Duration,
    /// Timeout for HTTP catalog fetches.
    pub http_timeout: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            catalog_location: DEFAULT_CATALOG_LOCATION.to_string(),
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl LoaderConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    ///
    /// | Env Var                            | Default             |
    /// |------------------------------------|---------------------|
    /// | `PROMPTOGRAPHY_CATALOG`            | `data/gallery.json` |
    /// | `PROMPTOGRAPHY_SEARCH_DEBOUNCE_MS` | `300`               |
    /// | `PROMPTOGRAPHY_HTTP_TIMEOUT_SECS`  | `10`                |
    ///
    /// Unparsable numbers fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let catalog_location = lookup("PROMPTOGRAPHY_CATALOG")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.catalog_location);

        let search_debounce = lookup("PROMPTOGRAPHY_SEARCH_DEBOUNCE_MS")
            .and_then(|v| v.trim().parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.search_debounce);

        let http_timeout = lookup("PROMPTOGRAPHY_HTTP_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.http_timeout);

        Self {
            catalog_location,
            search_debounce,
            http_timeout,
        }
    }

    /// The catalog source this configuration points at.
    pub fn source(&self) -> Result<Box<dyn CatalogSource>, LoadError> {
        source_for(&self.catalog_location, self.http_timeout)
    }

    /// A search debouncer using the configured delay.
    pub fn search_debouncer(&self) -> (SearchDebouncer, mpsc::UnboundedReceiver<String>) {
        SearchDebouncer::new(self.search_debounce)
    }
}
