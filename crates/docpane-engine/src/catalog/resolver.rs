use std::sync::Arc;
use std::time::Duration;

use super::cache::{CatalogCache, Clock, SystemClock};
use super::entry::CatalogEntry;
use super::title::is_markdown;
use crate::io::ContentSource;

/// Listed first whenever present.
pub const PRIMARY_DOCUMENT: &str = "QUICK_START.md";

/// Served, in this order, when the source cannot be listed.
pub const FALLBACK_DOCUMENTS: [&str; 11] = [
    "QUICK_START.md",
    "API_REFERENCE.md",
    "INTEGRATION_GUIDELINES.md",
    "SECURITY.md",
    "ARCHITECTURE.md",
    "RECOVERY.md",
    "EIP-7951.md",
    "EIP_7702.md",
    "ZK.md",
    "BUILD_VERIFICATION.md",
    "BROWSER_COMPATIBILITY.md",
];

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    pub cache_ttl: Duration,
    pub primary_document: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            primary_document: PRIMARY_DOCUMENT.to_string(),
        }
    }
}

/// Produces the ordered list of available documents.
pub struct CatalogResolver<S> {
    source: Arc<S>,
    cache: CatalogCache,
    primary_document: String,
}

impl<S: ContentSource> CatalogResolver<S> {
    pub fn new(source: Arc<S>, options: CatalogOptions) -> Self {
        Self::with_clock(source, options, Arc::new(SystemClock))
    }

    pub fn with_clock(source: Arc<S>, options: CatalogOptions, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            cache: CatalogCache::new(options.cache_ttl, clock),
            primary_document: options.primary_document,
        }
    }

    /// Markdown documents, primary first and the rest in name order.
    ///
    /// A fresh cached listing is returned without touching the source. If the
    /// source fails, the fallback list is served and nothing is cached, so the
    /// next call retries.
    pub async fn list_documents(&self) -> Arc<[CatalogEntry]> {
        if let Some(cached) = self.cache.get() {
            return cached;
        }

        match self.source.list_files().await {
            Ok(files) => {
                let entries: Arc<[CatalogEntry]> =
                    order_documents(files, &self.primary_document)
                        .iter()
                        .map(|f| CatalogEntry::from_filename(f))
                        .collect();
                log::info!("Catalog listed {} documents", entries.len());
                self.cache.store(Arc::clone(&entries));
                entries
            }
            Err(e) => {
                log::warn!("Error fetching doc files, serving fallback list: {e}");
                fallback_entries()
            }
        }
    }

    pub async fn find(&self, id: &str) -> Option<CatalogEntry> {
        self.list_documents()
            .await
            .iter()
            .find(|entry| entry.id() == id)
            .cloned()
    }

    /// The first listed entry, normally the primary document.
    pub async fn default_entry(&self) -> Option<CatalogEntry> {
        self.list_documents().await.first().cloned()
    }

    pub fn invalidate(&self) {
        self.cache.invalidate();
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }
}

/// Keeps markdown files, puts `primary` first and sorts the rest.
fn order_documents(files: Vec<String>, primary: &str) -> Vec<String> {
    let (mut head, mut rest): (Vec<String>, Vec<String>) = files
        .into_iter()
        .filter(|f| is_markdown(f))
        .partition(|f| f == primary);
    rest.sort();
    head.truncate(1);
    head.extend(rest);
    head
}

pub fn fallback_entries() -> Arc<[CatalogEntry]> {
    FALLBACK_DOCUMENTS
        .iter()
        .map(|f| CatalogEntry::from_filename(f))
        .collect()
}
