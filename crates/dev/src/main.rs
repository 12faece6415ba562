//! `promptography-dev` -- development helper for the gallery site.
//!
//! Loads the configured catalog (falling back to the demo entries), logs its
//! aggregate stats and categories, and prints the placeholder image mappings
//! for the sample images as JSON.
//!
//! An optional first argument is run as a gallery search through the
//! debouncer, and the matching entry ids are logged.
//!
//! # Environment variables
//!
//! | Variable                           | Default             | Description                    |
//! |------------------------------------|---------------------|--------------------------------|
//! | `PROMPTOGRAPHY_CATALOG`            | `data/gallery.json` | Catalog file path or http(s) URL |
//! | `PROMPTOGRAPHY_SEARCH_DEBOUNCE_MS` | `300`               | Search debounce delay          |
//! | `PROMPTOGRAPHY_HTTP_TIMEOUT_SECS`  | `10`                | HTTP fetch timeout             |

use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use promptography_core::catalog::{Catalog, CatalogStore};
use promptography_core::placeholder::{picsum_mappings, unsplash_mappings, PlaceholderImage};
use promptography_loader::config::LoaderConfig;
use promptography_loader::load::load_or_demo;

/// Output printed to stdout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageMappings {
    sample_images: Vec<PlaceholderImage>,
    alternative_images: Vec<PlaceholderImage>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promptography_dev=info,promptography_loader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = LoaderConfig::from_env();
    tracing::info!(
        catalog = %config.catalog_location,
        search_debounce_ms = config.search_debounce.as_millis() as u64,
        http_timeout_secs = config.http_timeout.as_secs(),
        "Starting promptography-dev",
    );

    let catalog = match config.source() {
        Ok(source) => load_or_demo(source.as_ref()).await,
        Err(e) => {
            tracing::warn!(error = %e, "Could not build catalog source, using demo entries");
            Catalog::demo()
        }
    };

    let mut store = CatalogStore::new(catalog);
    let stats = store.aggregate_stats();
    tracing::info!(
        total_artworks = stats.total_artworks,
        total_views = stats.total_views,
        total_likes = stats.total_likes,
        categories = ?store.categories(),
        "Catalog summary",
    );

    if let Some(query) = std::env::args().nth(1) {
        let (mut debouncer, mut rx) = config.search_debouncer();
        debouncer.push(query);
        if let Some(fired) = rx.recv().await {
            store.set_search(&fired);
            let matches: Vec<&str> = store
                .visible_entries()
                .iter()
                .map(|e| e.id.as_str())
                .collect();
            tracing::info!(query = %fired, ?matches, "Search results");
        }
    }

    let mappings = ImageMappings {
        sample_images: picsum_mappings(),
        alternative_images: unsplash_mappings(),
    };

    match serde_json::to_string_pretty(&mappings) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render image mappings");
            std::process::exit(1);
        }
    }
}
