//! In-memory gallery catalog and its derived, filtered view.
//!
//! [`Catalog`] is the parsed document (entries plus optional precomputed
//! stats). [`CatalogStore`] owns a catalog together with the current
//! [`CatalogQuery`] and derives the visible, ordered entry list on demand.
//! There is no ambient instance: callers construct a store at startup and
//! pass it to whatever renders it.

use std::collections::HashSet;

use serde::Deserialize;
use validator::Validate;

use crate::demo::demo_entries;
use crate::entry::{CatalogStats, GalleryEntry};
use crate::error::CoreError;
use crate::query::{matches_quick_search, matches_search, CatalogFilter, CatalogQuery, SortOrder};

/// Minimum trimmed length before the header quick-search returns anything.
pub const QUICK_SEARCH_MIN_CHARS: usize = 2;

// ---------------------------------------------------------------------------
// Catalog document
// ---------------------------------------------------------------------------

/// Wire shape accepted by [`Catalog::from_json`].
///
/// The gallery page ships `{ gallery, stats }` (`entries` is accepted as an
/// alias); the main page ships `{ posts }` without stats.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default, alias = "entries")]
    gallery: Option<Vec<GalleryEntry>>,
    #[serde(default)]
    posts: Option<Vec<GalleryEntry>>,
    #[serde(default)]
    stats: Option<CatalogStats>,
}

/// A loaded set of gallery entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub entries: Vec<GalleryEntry>,
    /// Precomputed stats from the document, if it carried any.
    pub stats: Option<CatalogStats>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    ///
    /// Fails with [`CoreError::Serialization`] on malformed JSON and
    /// [`CoreError::Validation`] when the document has no entry array,
    /// repeats an id, or carries an entry that breaks the schema rules.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let doc: CatalogDocument = serde_json::from_str(text)?;

        let entries = match (doc.gallery, doc.posts) {
            (Some(entries), _) | (None, Some(entries)) => entries,
            (None, None) => {
                return Err(CoreError::Validation(
                    "Catalog document has neither a 'gallery' nor a 'posts' array".to_string(),
                ))
            }
        };

        let catalog = Self {
            entries,
            stats: doc.stats,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in fallback catalog (no precomputed stats).
    pub fn demo() -> Self {
        Self {
            entries: demo_entries(),
            stats: None,
        }
    }

    /// Check per-entry schema rules and id uniqueness.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            entry
                .validate()
                .map_err(|e| CoreError::Validation(format!("Entry '{}': {e}", entry.id)))?;
            if !seen.insert(entry.id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Duplicate entry id '{}'",
                    entry.id
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Direction for stepping through the visible list from a detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Owns the catalog and the current query state.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    entries: Vec<GalleryEntry>,
    stats: Option<CatalogStats>,
    query: CatalogQuery,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            entries: catalog.entries,
            stats: catalog.stats,
            query: CatalogQuery::default(),
        }
    }

    /// Every entry in document order.
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Replace the whole query state at once.
    pub fn set_query(&mut self, query: CatalogQuery) {
        self.query = query;
    }

    pub fn set_filter(&mut self, filter: impl Into<CatalogFilter>) {
        self.query.filter = filter.into();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.query.sort = sort;
    }

    /// Set the search text. Blank text is kept but behaves as no search.
    pub fn set_search(&mut self, text: &str) {
        self.query.search = Some(text.to_string());
    }

    pub fn clear_search(&mut self) {
        self.query.search = None;
    }

    /// Apply filter, then search, then sort.
    pub fn visible_entries(&self) -> Vec<&GalleryEntry> {
        let needle = self.query.search_needle();
        let mut visible: Vec<&GalleryEntry> = self
            .entries
            .iter()
            .filter(|e| self.query.filter.matches(e))
            .filter(|e| needle.as_deref().map_or(true, |n| matches_search(e, n)))
            .collect();
        self.query.sort.sort(&mut visible);
        visible
    }

    pub fn find(&self, id: &str) -> Option<&GalleryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Increment the view counter of `id`.
    ///
    /// Returns `false` and changes nothing if no entry has that id.
    pub fn record_view(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.metadata.views = entry.metadata.views.saturating_add(1);
                true
            }
            None => {
                tracing::debug!(entry_id = id, "View recorded for unknown entry, ignoring");
                false
            }
        }
    }

    /// Open the detail view for `id`: records a view and returns the entry.
    pub fn open_entry(&mut self, id: &str) -> Option<&GalleryEntry> {
        if self.record_view(id) {
            self.find(id)
        } else {
            None
        }
    }

    /// The entry next to `id` in the visible list, wrapping at either end.
    ///
    /// Returns `None` when `id` is not currently visible.
    pub fn neighbor(&self, id: &str, direction: Direction) -> Option<&GalleryEntry> {
        let visible = self.visible_entries();
        let current = visible.iter().position(|e| e.id == id)?;
        let len = visible.len();
        let next = match direction {
            Direction::Next => (current + 1) % len,
            Direction::Previous => (current + len - 1) % len,
        };
        Some(visible[next])
    }

    /// Header quick-search over the full list, ignoring filter and sort.
    ///
    /// Queries shorter than [`QUICK_SEARCH_MIN_CHARS`] after trimming return
    /// nothing.
    pub fn quick_search(&self, text: &str) -> Vec<&GalleryEntry> {
        let needle = text.trim().to_lowercase();
        if needle.chars().count() < QUICK_SEARCH_MIN_CHARS {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| matches_quick_search(e, &needle))
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Header stats: verbatim from the document when it had them, otherwise
    /// counted over the full entry list.
    pub fn aggregate_stats(&self) -> CatalogStats {
        if let Some(stats) = self.stats {
            return stats;
        }
        CatalogStats {
            total_artworks: self.entries.len() as u64,
            total_views: self
                .entries
                .iter()
                .fold(0u64, |acc, e| acc.saturating_add(e.metadata.views)),
            total_likes: self
                .entries
                .iter()
                .fold(0u64, |acc, e| acc.saturating_add(e.metadata.likes)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{EntryMetadata, TechnicalDetails};
    use crate::types::EntryDate;

    fn entry(id: &str, category: &str, tags: &[&str], day: u32) -> GalleryEntry {
        GalleryEntry {
            id: id.to_string(),
            title: format!("{id} title"),
            prompt: format!("prompt for {id}"),
            description: String::new(),
            author: "Ada".to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: format!("images/{id}.jpg"),
            date_created: EntryDate::from_ymd_opt(2025, 3, day).unwrap(),
            technical_details: TechnicalDetails {
                model: "SDXL".to_string(),
                resolution: "1024x1024".to_string(),
                iterations: 20,
                style: None,
                additional_params: None,
            },
            metadata: EntryMetadata::default(),
        }
    }

    fn sample_store() -> CatalogStore {
        let mut moon = entry("moon", "space", &["night", "moon"], 3);
        moon.metadata = EntryMetadata {
            featured: true,
            likes: 40,
            views: 200,
            downloads: 1,
        };
        let mut city = entry("city", "digital", &["neon", "night"], 10);
        city.metadata.likes = 90;
        city.metadata.views = 50;
        let mut forest = entry("forest", "nature", &["green"], 1);
        forest.metadata = EntryMetadata {
            featured: true,
            likes: 5,
            views: 700,
            downloads: 0,
        };
        CatalogStore::new(Catalog {
            entries: vec![moon, city, forest],
            stats: None,
        })
    }

    fn ids(entries: &[&GalleryEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.clone()).collect()
    }

    // -- document parsing ----------------------------------------------------

    const GALLERY_DOC: &str = r#"{
        "gallery": [{
            "id": "a", "title": "A", "prompt": "p", "description": "d",
            "author": "x", "category": "space", "tags": [],
            "image": "images/a.jpg", "dateCreated": "2025-02-01",
            "technicalDetails": { "model": "m", "resolution": "512x512", "iterations": 4 },
            "metadata": { "featured": false, "likes": 1, "views": 2, "downloads": 3 }
        }],
        "stats": { "totalArtworks": 8, "totalViews": 1000, "totalLikes": 77 }
    }"#;

    #[test]
    fn parses_gallery_document_with_stats() {
        let catalog = Catalog::from_json(GALLERY_DOC).unwrap();
        assert_eq!(catalog.entries.len(), 1);
        assert_eq!(
            catalog.stats,
            Some(CatalogStats {
                total_artworks: 8,
                total_views: 1000,
                total_likes: 77,
            })
        );
    }

    #[test]
    fn parses_posts_document_without_stats() {
        let gallery: serde_json::Value = serde_json::from_str(GALLERY_DOC).unwrap();
        let doc = serde_json::json!({ "posts": gallery["gallery"] }).to_string();
        let catalog = Catalog::from_json(&doc).unwrap();
        assert_eq!(catalog.entries.len(), 1);
        assert_eq!(catalog.stats, None);
    }

    #[test]
    fn entries_alias_is_accepted() {
        let doc = GALLERY_DOC.replace("\"gallery\"", "\"entries\"");
        assert!(Catalog::from_json(&doc).is_ok());
    }

    #[test]
    fn document_without_entry_array_is_rejected() {
        let err = Catalog::from_json(r#"{ "stats": null }"#).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let catalog = Catalog {
            entries: vec![entry("a", "x", &[], 1), entry("a", "y", &[], 2)],
            stats: None,
        };
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate entry id 'a'"));
    }

    // -- filtering -----------------------------------------------------------

    #[test]
    fn all_filter_returns_every_entry_once() {
        let store = sample_store();
        let visible = store.visible_entries();
        assert_eq!(visible.len(), 3);
        assert_eq!(ids(&visible), vec!["city", "moon", "forest"]);
    }

    #[test]
    fn featured_filter_returns_featured_subset() {
        let mut store = sample_store();
        store.set_filter("featured");
        let visible = store.visible_entries();
        assert!(visible.iter().all(|e| e.metadata.featured));
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn term_filter_matches_category_or_tag() {
        let mut store = sample_store();
        store.set_filter("night");
        assert_eq!(ids(&store.visible_entries()), vec!["city", "moon"]);

        store.set_filter("nature");
        assert_eq!(ids(&store.visible_entries()), vec!["forest"]);
    }

    #[test]
    fn unknown_filter_yields_empty_list() {
        let mut store = sample_store();
        store.set_filter("underwater");
        assert!(store.visible_entries().is_empty());
    }

    // -- search --------------------------------------------------------------

    #[test]
    fn search_narrows_filtered_set() {
        let mut store = sample_store();
        store.set_filter("night");
        store.set_search("NEON");
        assert_eq!(ids(&store.visible_entries()), vec!["city"]);
    }

    #[test]
    fn search_matches_title_only() {
        let mut store = sample_store();
        // "forest title" appears in no prompt, tag, category or description.
        store.set_search("Forest Title");
        assert_eq!(ids(&store.visible_entries()), vec!["forest"]);
        assert_eq!(ids(&store.quick_search("forest title")), vec!["forest"]);
    }

    #[test]
    fn search_matches_description_only() {
        let mut store = sample_store();
        store.entries[1].description = "Rain-soaked alleys at dusk".to_string();
        store.set_search("alleys");
        assert_eq!(ids(&store.visible_entries()), vec!["city"]);
        assert_eq!(ids(&store.quick_search("ALLEYS")), vec!["city"]);
    }

    #[test]
    fn whitespace_search_is_no_search() {
        let mut store = sample_store();
        let before = ids(&store.visible_entries());
        store.set_search("   ");
        assert_eq!(ids(&store.visible_entries()), before);
        store.clear_search();
        assert_eq!(ids(&store.visible_entries()), before);
    }

    // -- sorting -------------------------------------------------------------

    #[test]
    fn newest_and_oldest_are_reverses() {
        let mut store = sample_store();
        store.set_sort(SortOrder::Newest);
        let mut newest = ids(&store.visible_entries());
        store.set_sort(SortOrder::Oldest);
        let oldest = ids(&store.visible_entries());
        newest.reverse();
        assert_eq!(newest, oldest);
    }

    #[test]
    fn popular_and_views_orders() {
        let mut store = sample_store();
        store.set_sort(SortOrder::Popular);
        assert_eq!(ids(&store.visible_entries()), vec!["city", "moon", "forest"]);
        store.set_sort(SortOrder::Views);
        assert_eq!(ids(&store.visible_entries()), vec!["forest", "moon", "city"]);
    }

    #[test]
    fn set_query_replaces_state_wholesale() {
        let mut store = sample_store();
        store.set_search("moon");
        store.set_query(CatalogQuery {
            filter: CatalogFilter::Featured,
            sort: SortOrder::Views,
            search: None,
        });
        assert_eq!(store.query().search, None);
        assert_eq!(ids(&store.visible_entries()), vec!["forest", "moon"]);
    }

    // -- views and stats -----------------------------------------------------

    #[test]
    fn record_view_increments_views() {
        let mut store = sample_store();
        assert!(store.record_view("city"));
        assert_eq!(store.find("city").unwrap().metadata.views, 51);
    }

    #[test]
    fn record_view_unknown_id_changes_nothing() {
        let mut store = sample_store();
        let entries_before = store.entries().to_vec();
        let stats_before = store.aggregate_stats();
        assert!(!store.record_view("nope"));
        assert_eq!(store.entries(), entries_before.as_slice());
        assert_eq!(store.aggregate_stats(), stats_before);
    }

    #[test]
    fn open_entry_records_view() {
        let mut store = sample_store();
        let views = store.open_entry("moon").map(|e| e.metadata.views);
        assert_eq!(views, Some(201));
        assert!(store.open_entry("missing").is_none());
    }

    #[test]
    fn computed_stats_sum_full_list() {
        let mut store = sample_store();
        store.set_filter("featured");
        assert_eq!(
            store.aggregate_stats(),
            CatalogStats {
                total_artworks: 3,
                total_views: 950,
                total_likes: 135,
            }
        );
    }

    #[test]
    fn computed_stats_saturate_instead_of_overflowing() {
        let mut a = entry("a", "x", &[], 1);
        a.metadata.views = u64::MAX;
        a.metadata.likes = u64::MAX;
        let mut b = entry("b", "x", &[], 2);
        b.metadata.views = u64::MAX;
        b.metadata.likes = 3;
        let doc = serde_json::json!({ "posts": [a, b] }).to_string();
        let store = CatalogStore::new(Catalog::from_json(&doc).unwrap());
        assert_eq!(
            store.aggregate_stats(),
            CatalogStats {
                total_artworks: 2,
                total_views: u64::MAX,
                total_likes: u64::MAX,
            }
        );
    }

    #[test]
    fn document_stats_are_returned_verbatim() {
        let mut store = CatalogStore::new(Catalog::from_json(GALLERY_DOC).unwrap());
        store.record_view("a");
        assert_eq!(store.aggregate_stats().total_views, 1000);
    }

    #[test]
    fn empty_catalog_has_zero_stats_and_no_entries() {
        let store = CatalogStore::new(Catalog::default());
        assert!(store.visible_entries().is_empty());
        assert_eq!(store.aggregate_stats(), CatalogStats::default());
    }

    // -- navigation and quick search -----------------------------------------

    #[test]
    fn neighbor_wraps_at_both_ends() {
        let store = sample_store();
        // Visible order (newest): city, moon, forest
        assert_eq!(store.neighbor("forest", Direction::Next).unwrap().id, "city");
        assert_eq!(store.neighbor("city", Direction::Previous).unwrap().id, "forest");
        assert_eq!(store.neighbor("city", Direction::Next).unwrap().id, "moon");
    }

    #[test]
    fn neighbor_of_hidden_entry_is_none() {
        let mut store = sample_store();
        store.set_filter("nature");
        assert!(store.neighbor("city", Direction::Next).is_none());
    }

    #[test]
    fn quick_search_requires_two_characters() {
        let store = sample_store();
        assert!(store.quick_search(" n ").is_empty());
        assert_eq!(ids(&store.quick_search("ne")), vec!["city"]);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let mut store = sample_store();
        store.entries.push(entry("extra", "space", &[], 4));
        assert_eq!(store.categories(), vec!["space", "digital", "nature"]);
    }
}
