//! Catalog loading for Promptography.
//!
//! Fetches catalog documents from local files or HTTP, parses them into
//! [`promptography_core::catalog::Catalog`], falls back to the demo catalog
//! on failure, and debounces search-as-you-type input.

pub mod config;
pub mod debounce;
pub mod error;
pub mod load;
pub mod source;
