/// Gallery entry identifiers are URL-safe slugs.
pub type EntryId = String;

/// Entry dates are calendar days, serialized as ISO 8601 `YYYY-MM-DD`.
pub type EntryDate = chrono::NaiveDate;
