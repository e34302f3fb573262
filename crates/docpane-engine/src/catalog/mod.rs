//! # Catalog
//!
//! Which documents exist and what they are called.
//!
//! Entries are derived from file names alone (`title`), listed through a
//! [`ContentSource`](crate::io::ContentSource) and kept for a fixed time in an
//! owned [`CatalogCache`]. A source that cannot be listed yields a curated
//! fallback list instead of an error.

pub mod cache;
pub mod entry;
pub mod resolver;
pub mod title;

pub use cache::{CatalogCache, Clock, SystemClock};
pub use entry::CatalogEntry;
pub use resolver::{
    CatalogOptions, CatalogResolver, DEFAULT_CACHE_TTL, FALLBACK_DOCUMENTS, PRIMARY_DOCUMENT,
    fallback_entries,
};
pub use title::{id_for, is_markdown, title_for};
