//! Catalog query state: filter, sort order, and search text.
//!
//! Pure predicates and comparators over [`GalleryEntry`]; the store in
//! [`crate::catalog`] applies them in a fixed order (filter, search, sort).

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::GalleryEntry;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Raw filter value selecting every entry.
pub const FILTER_ALL: &str = "all";

/// Raw filter value selecting featured entries.
pub const FILTER_FEATURED: &str = "featured";

/// Which subset of the catalog is shown.
///
/// Any raw value other than `all` / `featured` is a category-or-tag term.
/// A term nothing carries simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogFilter {
    #[default]
    All,
    Featured,
    Term(String),
}

impl CatalogFilter {
    /// Parse a raw filter value as sent by a filter button.
    pub fn parse(raw: &str) -> Self {
        match raw {
            FILTER_ALL => Self::All,
            FILTER_FEATURED => Self::Featured,
            other => Self::Term(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Featured => FILTER_FEATURED,
            Self::Term(term) => term,
        }
    }

    pub fn matches(&self, entry: &GalleryEntry) -> bool {
        match self {
            Self::All => true,
            Self::Featured => entry.metadata.featured,
            Self::Term(term) => entry.has_category_or_tag(term),
        }
    }
}

impl From<&str> for CatalogFilter {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// Ordering of the visible entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// `dateCreated` descending.
    #[default]
    Newest,
    /// `dateCreated` ascending.
    Oldest,
    /// Likes descending.
    Popular,
    /// Views descending.
    Views,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Popular => "popular",
            Self::Views => "views",
        }
    }

    pub fn compare(self, a: &GalleryEntry, b: &GalleryEntry) -> Ordering {
        match self {
            Self::Newest => b.date_created.cmp(&a.date_created),
            Self::Oldest => a.date_created.cmp(&b.date_created),
            Self::Popular => b.metadata.likes.cmp(&a.metadata.likes),
            Self::Views => b.metadata.views.cmp(&a.metadata.views),
        }
    }

    /// Stable sort: entries that compare equal keep their relative order.
    pub fn sort(self, entries: &mut [&GalleryEntry]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "popular" => Ok(Self::Popular),
            "views" => Ok(Self::Views),
            _ => Err(CoreError::Validation(format!(
                "Invalid sort order '{s}'. Must be one of: newest, oldest, popular, views"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Normalize raw search input into a lowercase needle.
///
/// Returns `None` for empty or whitespace-only input, which means "no search".
pub fn normalize_search(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Gallery search: title, prompt, description, category, or any tag.
///
/// `needle` must already be normalized with [`normalize_search`].
pub fn matches_search(entry: &GalleryEntry, needle: &str) -> bool {
    contains_ci(&entry.title, needle)
        || contains_ci(&entry.prompt, needle)
        || contains_ci(&entry.description, needle)
        || contains_ci(&entry.category, needle)
        || entry.tags.iter().any(|tag| contains_ci(tag, needle))
}

/// Header quick-search: title, prompt, description, or any tag.
pub fn matches_quick_search(entry: &GalleryEntry, needle: &str) -> bool {
    contains_ci(&entry.title, needle)
        || contains_ci(&entry.prompt, needle)
        || contains_ci(&entry.description, needle)
        || entry.tags.iter().any(|tag| contains_ci(tag, needle))
}

// ---------------------------------------------------------------------------
// Query state
// ---------------------------------------------------------------------------

/// The full query state owned by a [`crate::catalog::CatalogStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub filter: CatalogFilter,
    pub sort: SortOrder,
    pub search: Option<String>,
}

impl CatalogQuery {
    /// The effective search needle, if the query has a non-blank search.
    pub fn search_needle(&self) -> Option<String> {
        self.search.as_deref().and_then(normalize_search)
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

    fn entry(id: &str, day: u32, likes: u64, views: u64) -> GalleryEntry {
        GalleryEntry {
            id: id.to_string(),
            title: format!("Title {id}"),
            prompt: "A Neon skyline".to_string(),
            description: String::new(),
            author: "Ada".to_string(),
            category: "digital".to_string(),
            tags: vec!["city".to_string()],
            image: format!("images/{id}.jpg"),
            date_created: EntryDate::from_ymd_opt(2025, 1, day).unwrap(),
            technical_details: TechnicalDetails {
                model: "SDXL".to_string(),
                resolution: "1024x1024".to_string(),
                iterations: 1,
                style: None,
                additional_params: None,
            },
            metadata: EntryMetadata {
                featured: false,
                likes,
                views,
                downloads: 0,
            },
        }
    }

    // -- filter --------------------------------------------------------------

    #[test]
    fn filter_parse_recognizes_keywords() {
        assert_eq!(CatalogFilter::parse("all"), CatalogFilter::All);
        assert_eq!(CatalogFilter::parse("featured"), CatalogFilter::Featured);
        assert_eq!(
            CatalogFilter::parse("space"),
            CatalogFilter::Term("space".to_string())
        );
    }

    #[test]
    fn filter_as_str_round_trips_raw_value() {
        assert_eq!(CatalogFilter::from("portrait").as_str(), "portrait");
        assert_eq!(CatalogFilter::All.as_str(), "all");
    }

    #[test]
    fn unknown_term_matches_nothing() {
        let e = entry("a", 1, 0, 0);
        assert!(!CatalogFilter::parse("underwater").matches(&e));
    }

    // -- sort ----------------------------------------------------------------

    #[test]
    fn sort_from_str_accepts_known_values() {
        assert_eq!("newest".parse::<SortOrder>().unwrap(), SortOrder::Newest);
        assert_eq!("views".parse::<SortOrder>().unwrap(), SortOrder::Views);
    }

    #[test]
    fn sort_from_str_rejects_unknown_value() {
        let err = "random".parse::<SortOrder>().unwrap_err();
        assert!(err.to_string().contains("Invalid sort order"));
    }

    #[test]
    fn popular_sort_is_stable_on_ties() {
        let a = entry("a", 1, 5, 0);
        let b = entry("b", 2, 9, 0);
        let c = entry("c", 3, 5, 0);
        let mut list = vec![&a, &b, &c];
        SortOrder::Popular.sort(&mut list);
        let ids: Vec<&str> = list.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn views_sort_is_descending() {
        let a = entry("a", 1, 0, 10);
        let b = entry("b", 2, 0, 30);
        let mut list = vec![&a, &b];
        SortOrder::Views.sort(&mut list);
        assert_eq!(list[0].id, "b");
    }

    // -- search --------------------------------------------------------------

    #[test]
    fn blank_search_normalizes_to_none() {
        assert_eq!(normalize_search(""), None);
        assert_eq!(normalize_search("   \t"), None);
        assert_eq!(normalize_search("  Neon "), Some("neon".to_string()));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let e = entry("a", 1, 0, 0);
        assert!(matches_search(&e, "neon sky"));
        assert!(matches_search(&e, "digi"));
        assert!(matches_search(&e, "cit"));
        assert!(!matches_search(&e, "forest"));
    }

    #[test]
    fn quick_search_ignores_category() {
        let e = entry("a", 1, 0, 0);
        assert!(matches_search(&e, "digital"));
        assert!(!matches_quick_search(&e, "digital"));
    }

    #[test]
    fn title_alone_is_searched() {
        let e = entry("lunar", 1, 0, 0);
        assert!(matches_search(&e, "title lunar"));
        assert!(matches_quick_search(&e, "title lunar"));
    }

    #[test]
    fn description_alone_is_searched() {
        let mut e = entry("a", 1, 0, 0);
        e.description = "Painted with watercolour brushes".to_string();
        assert!(matches_search(&e, "watercolour"));
        assert!(matches_quick_search(&e, "watercolour"));
    }

    #[test]
    fn query_search_needle_skips_whitespace() {
        let query = CatalogQuery {
            search: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.search_needle(), None);
    }
}
