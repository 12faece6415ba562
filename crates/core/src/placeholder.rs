//! Placeholder image URLs for the sample catalog.
//!
//! The sample gallery references image paths that are not committed to the
//! site. During development these map to public placeholder services.

use serde::Serialize;

/// Sample image paths with the unsplash search keywords for each.
const SAMPLE_IMAGES: [(&str, &str); 8] = [
    ("images/moonscape-01.jpg", "space,moon"),
    ("images/cyberpunk-portrait-02.jpg", "cyberpunk,neon"),
    ("images/abstract-symphony-03.jpg", "abstract,colorful"),
    ("images/neo-gothic-cathedral-04.jpg", "gothic,architecture"),
    ("images/steampunk-inventor-05.jpg", "vintage,mechanical"),
    ("images/digital-forest-06.jpg", "forest,digital"),
    ("images/floating-city-07.jpg", "city,clouds"),
    ("images/quantum-particles-08.jpg", "particles,physics"),
];

/// Edge length requested from the placeholder services.
pub const PLACEHOLDER_SIZE: u32 = 1024;

/// One sample image path and the URL standing in for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderImage {
    pub path: &'static str,
    pub url: String,
}

/// Picsum URLs, one random seed per sample. The first is blurred.
pub fn picsum_mappings() -> Vec<PlaceholderImage> {
    SAMPLE_IMAGES
        .iter()
        .enumerate()
        .map(|(i, &(path, _))| {
            let seed = i + 1;
            let blur = if seed == 1 { "&blur=1" } else { "" };
            PlaceholderImage {
                path,
                url: format!(
                    "https://picsum.photos/{PLACEHOLDER_SIZE}/{PLACEHOLDER_SIZE}?random={seed}{blur}"
                ),
            }
        })
        .collect()
}

/// Keyword-matched unsplash source URLs.
pub fn unsplash_mappings() -> Vec<PlaceholderImage> {
    SAMPLE_IMAGES
        .iter()
        .map(|&(path, keywords)| PlaceholderImage {
            path,
            url: format!(
                "https://source.unsplash.com/{PLACEHOLDER_SIZE}x{PLACEHOLDER_SIZE}/?{keywords}"
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picsum_first_entry_is_blurred() {
        let mappings = picsum_mappings();
        assert_eq!(mappings.len(), 8);
        assert_eq!(mappings[0].path, "images/moonscape-01.jpg");
        assert_eq!(
            mappings[0].url,
            "https://picsum.photos/1024/1024?random=1&blur=1"
        );
        assert_eq!(
            mappings[7].url,
            "https://picsum.photos/1024/1024?random=8"
        );
    }

    #[test]
    fn unsplash_uses_keywords() {
        let mappings = unsplash_mappings();
        assert_eq!(
            mappings[1].url,
            "https://source.unsplash.com/1024x1024/?cyberpunk,neon"
        );
        assert_eq!(mappings[1].path, "images/cyberpunk-portrait-02.jpg");
    }

    #[test]
    fn both_mappings_cover_the_same_paths_in_order() {
        let picsum: Vec<_> = picsum_mappings().into_iter().map(|m| m.path).collect();
        let unsplash: Vec<_> = unsplash_mappings().into_iter().map(|m| m.path).collect();
        assert_eq!(picsum, unsplash);
    }
}
