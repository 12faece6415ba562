//! Promptography domain core.
//!
//! Pure logic with no I/O: the gallery entry schema, the catalog query
//! engine, the submission wizard's record builder, and development
//! placeholder mappings. Loading catalogs from files or HTTP lives in
//! `promptography-loader`.

pub mod catalog;
pub mod demo;
pub mod entry;
pub mod error;
pub mod naming;
pub mod placeholder;
pub mod query;
pub mod sources;
pub mod submission;
pub mod types;
