//! Gallery entry schema.
//!
//! Defines the JSON shape shared by the public gallery document, the
//! main-page `posts` document, and the records produced by the submission
//! wizard. Field order here is the serialized key order.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{EntryDate, EntryId};

/// One artwork in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEntry {
    #[validate(length(min = 1))]
    pub id: EntryId,
    pub title: String,
    pub prompt: String,
    pub description: String,
    pub author: String,
    pub category: String,

    /// Display order is preserved; matching ignores position.
    pub tags: Vec<String>,

    /// Relative path (`images/<id>.<ext>`) or absolute URL.
    pub image: String,
    pub date_created: EntryDate,

    #[validate(nested)]
    pub technical_details: TechnicalDetails,
    pub metadata: EntryMetadata,
}

impl GalleryEntry {
    /// Whether `term` is this entry's category or one of its tags.
    ///
    /// Exact, case-sensitive comparison.
    pub fn has_category_or_tag(&self, term: &str) -> bool {
        self.category == term || self.tags.iter().any(|t| t == term)
    }
}

/// Generation parameters recorded alongside the artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalDetails {
    pub model: String,
    pub resolution: String,

    #[validate(range(min = 1))]
    pub iterations: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_params: Option<String>,
}

/// Engagement counters and the featured flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryMetadata {
    pub featured: bool,
    pub likes: u64,
    pub views: u64,

    /// Older documents and the demo data omit this counter.
    #[serde(default)]
    pub downloads: u64,
}

/// Aggregate numbers shown in the gallery header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_artworks: u64,
    pub total_views: u64,
    pub total_likes: u64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
