//! Fetch, parse, and validate a catalog, with demo fallback.

use promptography_core::catalog::Catalog;

use crate::error::LoadError;
use crate::source::CatalogSource;

/// Fetch and parse a catalog document from `source`.
pub async fn load(source: &dyn CatalogSource) -> Result<Catalog, LoadError> {
    let text = source.fetch().await?;
    let catalog = Catalog::from_json(&text)?;

    tracing::info!(
        source = %source.describe(),
        entries = catalog.entries.len(),
        has_stats = catalog.stats.is_some(),
        "Catalog loaded",
    );

    Ok(catalog)
}

/// Like [`load`], but substitutes the built-in demo catalog on any failure so
/// the gallery is never empty.
pub async fn load_or_demo(source: &dyn CatalogSource) -> Catalog {
    match load(source).await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!(
                source = %source.describe(),
                error = %e,
                "Could not load catalog, using demo entries",
            );
            Catalog::demo()
        }
    }
}
