//! Submission wizard validation and record building.
//!
//! The admin wizard collects raw form values across four steps. This module
//! validates a step's required fields, normalizes the values into a
//! [`SubmissionRecord`], and renders the record as canonical pretty JSON for
//! copy/download. Nothing here touches the DOM; the caller supplies field
//! values and a description of the selected file.

use serde::{Deserialize, Serialize};

use crate::entry::{EntryMetadata, GalleryEntry, TechnicalDetails};
use crate::error::CoreError;
use crate::naming;
use crate::sources::{Clock, RandomSuffix, SuffixSource, SystemClock};

/// A freshly built gallery entry, ready for export.
pub type SubmissionRecord = GalleryEntry;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Resolution recorded when the field is left blank.
pub const DEFAULT_RESOLUTION: &str = "1024x1024";

/// Iteration count recorded when the field is blank, unparsable, or < 1.
pub const DEFAULT_ITERATIONS: u32 = 1;

/// Largest accepted image upload (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Notice shown when a step has blank required fields.
pub const NOTICE_REQUIRED_FIELDS: &str = "Please fill in all required fields";

/// Notice shown when step 2 has no selected image.
pub const NOTICE_SELECT_IMAGE: &str = "Please select an image";

// ---------------------------------------------------------------------------
// Wizard steps
// ---------------------------------------------------------------------------

/// The four steps of the submission wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    Image,
    TechnicalDetails,
    Review,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 4;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::BasicInfo),
            2 => Ok(Self::Image),
            3 => Ok(Self::TechnicalDetails),
            4 => Ok(Self::Review),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between 1 and {TOTAL_STEPS}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Image => 2,
            Self::TechnicalDetails => 3,
            Self::Review => 4,
        }
    }

    /// Required text fields, in form order.
    pub fn required_fields(self) -> &'static [FormField] {
        match self {
            Self::BasicInfo => &[FormField::Title, FormField::Author, FormField::Category],
            Self::Image => &[FormField::Prompt],
            Self::TechnicalDetails => &[FormField::Model],
            Self::Review => &[],
        }
    }

    pub fn requires_image(self) -> bool {
        matches!(self, Self::Image)
    }
}

// ---------------------------------------------------------------------------
// Form input
// ---------------------------------------------------------------------------

/// Text inputs of the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Title,
    Author,
    Category,
    Tags,
    Prompt,
    Description,
    Model,
    Resolution,
    Iterations,
    Style,
    AdditionalParams,
}

impl FormField {
    /// The input element id used by the form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Category => "category",
            Self::Tags => "tags",
            Self::Prompt => "prompt",
            Self::Description => "description",
            Self::Model => "model",
            Self::Resolution => "resolution",
            Self::Iterations => "iterations",
            Self::Style => "style",
            Self::AdditionalParams => "additionalParams",
        }
    }
}

/// Raw, untrusted form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionFields {
    pub title: String,
    pub author: String,
    pub category: String,
    /// Comma-separated tag list.
    pub tags: String,
    pub prompt: String,
    pub description: String,
    pub model: String,
    pub resolution: String,
    pub iterations: String,
    pub style: String,
    pub additional_params: String,
    /// The "featured" checkbox.
    pub featured: bool,
}

impl SubmissionFields {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Category => &self.category,
            FormField::Tags => &self.tags,
            FormField::Prompt => &self.prompt,
            FormField::Description => &self.description,
            FormField::Model => &self.model,
            FormField::Resolution => &self.resolution,
            FormField::Iterations => &self.iterations,
            FormField::Style => &self.style,
            FormField::AdditionalParams => &self.additional_params,
        }
    }
}

/// The image file the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl SelectedImage {
    /// Extension taken from the picked file's name.
    pub fn extension(&self) -> &str {
        naming::image_extension(Some(&self.file_name))
    }
}

/// Check a picked file before accepting it as the submission image.
///
/// Rejects non-`image/*` MIME types and files over [`MAX_IMAGE_BYTES`].
pub fn validate_image(image: &SelectedImage) -> Result<(), CoreError> {
    if !image.mime_type.starts_with("image/") {
        return Err(CoreError::Validation("Please select a valid image file".to_string()));
    }
    if image.size_bytes > MAX_IMAGE_BYTES {
        return Err(CoreError::Validation("Image file size must be less than 5MB".to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Step validation
// ---------------------------------------------------------------------------

/// Outcome of validating one wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepValidation {
    pub ok: bool,
    /// First blank required field in form order, for focusing.
    pub first_invalid_field: Option<FormField>,
    /// Step 2 was submitted without an image.
    pub missing_image: bool,
}

impl StepValidation {
    /// The notification to show, if the step failed.
    pub fn notice(&self) -> Option<&'static str> {
        if self.first_invalid_field.is_some() {
            Some(NOTICE_REQUIRED_FIELDS)
        } else if self.missing_image {
            Some(NOTICE_SELECT_IMAGE)
        } else {
            None
        }
    }
}

/// Validate the required inputs of `step`.
///
/// A field is filled when it contains a non-whitespace character. Step 2
/// additionally needs a selected image.
pub fn validate_step(
    step: WizardStep,
    fields: &SubmissionFields,
    selected_image: Option<&SelectedImage>,
) -> StepValidation {
    let first_invalid_field = step
        .required_fields()
        .iter()
        .copied()
        .find(|f| fields.value(*f).trim().is_empty());
    let missing_image = step.requires_image() && selected_image.is_none();

    StepValidation {
        ok: first_invalid_field.is_none() && !missing_image,
        first_invalid_field,
        missing_image,
    }
}

// ---------------------------------------------------------------------------
// Field normalization
// ---------------------------------------------------------------------------

/// Split comma-separated tags, trimming each and dropping empty pieces.
///
/// Order is kept and duplicates pass through.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Parse the leading decimal digits of the iterations field, after an
/// optional `+` sign.
///
/// Blank, non-numeric, zero, negative, or overflowing input collapses to
/// [`DEFAULT_ITERATIONS`].
pub fn parse_iterations(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits
        .parse::<u32>()
        .ok()
        .filter(|n| *n >= 1)
        .unwrap_or(DEFAULT_ITERATIONS)
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

/// Summary shown on the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPreview {
    pub title: String,
    pub prompt: String,
    pub tags: Vec<String>,
    pub category: String,
    pub author: String,
    pub model: String,
    pub featured: bool,
    pub has_image: bool,
}

/// Build the review-step summary, substituting placeholders for blanks.
pub fn preview(
    fields: &SubmissionFields,
    selected_image: Option<&SelectedImage>,
) -> SubmissionPreview {
    let or = |raw: &str, fallback: &str| non_blank(raw).unwrap_or_else(|| fallback.to_string());
    SubmissionPreview {
        title: or(&fields.title, "Untitled"),
        prompt: or(&fields.prompt, "No prompt entered"),
        tags: parse_tags(&fields.tags),
        category: or(&fields.category, "None"),
        author: or(&fields.author, "Unknown"),
        model: or(&fields.model, "Not specified"),
        featured: fields.featured,
        has_image: selected_image.is_some(),
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Turns form values into [`SubmissionRecord`]s.
///
/// Generic over its clock and suffix source so tests can pin both.
#[derive(Debug, Clone, Default)]
pub struct SubmissionBuilder<C = SystemClock, S = RandomSuffix> {
    clock: C,
    suffixes: S,
}

impl SubmissionBuilder {
    /// Builder using the system clock and thread-local RNG.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock, S: SuffixSource> SubmissionBuilder<C, S> {
    pub fn with_sources(clock: C, suffixes: S) -> Self {
        Self { clock, suffixes }
    }

    /// Generate a fresh id for `title`.
    pub fn generate_id(&self, title: &str) -> String {
        naming::entry_id(title.trim(), &self.suffixes.next_suffix())
    }

    /// Normalize form values into a record.
    ///
    /// Never fails: every coercion has a default. Counters start at zero
    /// and `dateCreated` is the clock's current day.
    pub fn build_record(
        &self,
        fields: &SubmissionFields,
        selected_image: Option<&SelectedImage>,
    ) -> SubmissionRecord {
        let id = self.generate_id(&fields.title);
        let extension =
            selected_image.map_or(naming::DEFAULT_IMAGE_EXTENSION, SelectedImage::extension);
        let image = naming::image_path(&id, extension);

        SubmissionRecord {
            image,
            title: fields.title.trim().to_string(),
            prompt: fields.prompt.trim().to_string(),
            description: fields.description.trim().to_string(),
            author: fields.author.trim().to_string(),
            category: fields.category.trim().to_string(),
            tags: parse_tags(&fields.tags),
            date_created: self.clock.today(),
            technical_details: TechnicalDetails {
                model: fields.model.trim().to_string(),
                resolution: non_blank(&fields.resolution)
                    .unwrap_or_else(|| DEFAULT_RESOLUTION.to_string()),
                iterations: parse_iterations(&fields.iterations),
                style: non_blank(&fields.style),
                additional_params: non_blank(&fields.additional_params),
            },
            metadata: EntryMetadata {
                featured: fields.featured,
                likes: 0,
                views: 0,
                downloads: 0,
            },
            id,
        }
    }

    /// Suggest a file name (`{id}.{ext}`) for the image the user is about to
    /// upload.
    pub fn suggest_image_filename(
        &self,
        title: &str,
        selected_image: Option<&SelectedImage>,
    ) -> Result<String, CoreError> {
        if title.trim().is_empty() {
            return Err(CoreError::Validation("Please enter a title first".to_string()));
        }
        let id = self.generate_id(title);
        let extension =
            selected_image.map_or(naming::DEFAULT_IMAGE_EXTENSION, SelectedImage::extension);
        Ok(naming::image_file_name(&id, extension))
    }
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Render a record as pretty JSON (two-space indent, schema key order).
pub fn serialize_record(record: &SubmissionRecord) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// File name offered for downloading the record.
pub fn download_file_name(record: &SubmissionRecord) -> String {
    naming::json_file_name(&record.id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
