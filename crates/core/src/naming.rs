//! Entry id and file naming conventions.
//!
//! Ids are `{slug}-{suffix}` where the slug is derived from the title and the
//! suffix is a short random base-36 string. Image files live under
//! `images/{id}.{ext}`; exported records are named `{id}.json`.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of the title-derived slug portion of an id.
pub const MAX_SLUG_LENGTH: usize = 50;

/// Number of base-36 characters in the uniqueness suffix.
pub const ID_SUFFIX_LENGTH: usize = 6;

/// Directory prefix for gallery images.
pub const IMAGE_DIR: &str = "images";

/// Extension used when no image file was selected.
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

static NON_SLUG_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Convert a title into a lowercase, hyphen-separated slug.
///
/// Every run of characters outside `[a-z0-9]` becomes a single hyphen,
/// leading and trailing hyphens are stripped, and the result is cut to
/// [`MAX_SLUG_LENGTH`] characters.
///
/// # Examples
///
/// ```
/// use promptography_core::naming::slugify;
/// assert_eq!(slugify("Neon Dream!!"), "neon-dream");
/// assert_eq!(slugify("  The Moon & Stars  "), "the-moon-stars");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = NON_SLUG_RUN_RE.replace_all(&lowered, "-");
    let trimmed = hyphenated.trim_matches('-');
    // Only ASCII remains, so byte length equals char count.
    trimmed[..trimmed.len().min(MAX_SLUG_LENGTH)].to_string()
}

/// Build an entry id from a title and a uniqueness suffix.
pub fn entry_id(title: &str, suffix: &str) -> String {
    format!("{}-{suffix}", slugify(title))
}

/// Extension of a selected file name: the text after the last `.`.
///
/// A name without a dot yields the whole name. No file yields
/// [`DEFAULT_IMAGE_EXTENSION`].
pub fn image_extension(file_name: Option<&str>) -> &str {
    match file_name {
        Some(name) => name.rsplit('.').next().unwrap_or(name),
        None => DEFAULT_IMAGE_EXTENSION,
    }
}

/// Relative image path for an entry: `images/{id}.{ext}`.
pub fn image_path(id: &str, extension: &str) -> String {
    format!("{IMAGE_DIR}/{id}.{extension}")
}

/// Image file name for an entry: `{id}.{ext}`.
pub fn image_file_name(id: &str, extension: &str) -> String {
    format!("{id}.{extension}")
}

/// Download name for an exported record: `{id}.json`.
pub fn json_file_name(id: &str) -> String {
    format!("{id}.json")
}
