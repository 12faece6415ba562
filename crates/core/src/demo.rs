//! Built-in demo content shown when the catalog document cannot be loaded.

use crate::entry::{EntryMetadata, GalleryEntry, TechnicalDetails};
use crate::types::EntryDate;

/// Identifier of the single fallback entry.
pub const DEMO_ENTRY_ID: &str = "demo-1";

/// The fallback entry list, so the gallery is never empty.
pub fn demo_entries() -> Vec<GalleryEntry> {
    vec![GalleryEntry {
        id: DEMO_ENTRY_ID.to_string(),
        title: "Demo Image".to_string(),
        prompt: "A beautiful demonstration of AI art generation with detailed prompts and stunning visual results".to_string(),
        description: "This is a demo image to showcase the gallery functionality.".to_string(),
        author: "Demo Artist".to_string(),
        category: "landscapes".to_string(),
        tags: vec![
            "demo".to_string(),
            "placeholder".to_string(),
            "example".to_string(),
        ],
        image: "https://via.placeholder.com/400x400/6366f1/ffffff?text=Demo+Art".to_string(),
        date_created: EntryDate::from_ymd_opt(2025, 1, 15).unwrap_or_default(),
        technical_details: TechnicalDetails {
            model: "Demo Model".to_string(),
            resolution: "400x400".to_string(),
            iterations: 1,
            style: None,
            additional_params: None,
        },
        metadata: EntryMetadata {
            featured: true,
            likes: 42,
            views: 100,
            downloads: 0,
        },
    }]
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[test]
    fn demo_entries_are_valid() {
        let entries = demo_entries();
        assert_eq!(entries.len(), 1);
        assert!(entries.iter().all(|e| e.validate().is_ok()));
        assert_eq!(entries[0].id, DEMO_ENTRY_ID);
        assert_eq!(
            entries[0].date_created,
            EntryDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
    }
}
