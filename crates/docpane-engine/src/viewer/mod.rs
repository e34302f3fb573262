//! # Viewer
//!
//! One documentation viewing session: the catalog, the content source, the
//! parser and the anchor navigator wired together.
//!
//! Every select issues a [`RequestToken`]. A fetch that completes after a newer
//! select was issued is dropped without touching the displayed state and
//! without scrolling, so the last document asked for is the one shown.

pub mod request;
pub mod state;

pub use request::{RequestToken, RequestTracker};
pub use state::{FAILED_TO_LOAD, LoadState, LoadedDocument, SelectOutcome};

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::anchors::{AnchorNavigator, LinkAction, ScrollTrigger};
use crate::catalog::{CatalogEntry, CatalogResolver, is_markdown};
use crate::io::ContentSource;
use crate::parsing::parse_document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerOptions {
    /// Upper bound on a single document fetch.
    pub fetch_timeout: Duration,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

/// Result of [`DocumentViewer::open_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Anchor(String),
    /// The link named another catalog document, which was selected.
    Document { id: String, outcome: SelectOutcome },
    External(String),
}

pub struct DocumentViewer<S> {
    catalog: CatalogResolver<S>,
    navigator: AnchorNavigator,
    requests: RequestTracker,
    state: Mutex<LoadState>,
    options: ViewerOptions,
}

impl<S: ContentSource> DocumentViewer<S> {
    pub fn new(
        catalog: CatalogResolver<S>,
        navigator: AnchorNavigator,
        options: ViewerOptions,
    ) -> Self {
        Self {
            catalog,
            navigator,
            requests: RequestTracker::default(),
            state: Mutex::new(LoadState::Idle),
            options,
        }
    }

    pub fn navigator(&self) -> &AnchorNavigator {
        &self.navigator
    }

    pub fn catalog(&self) -> &CatalogResolver<S> {
        &self.catalog
    }

    pub fn mount(&self) {
        self.navigator.on_mount();
    }

    pub async fn documents(&self) -> Arc<[CatalogEntry]> {
        self.catalog.list_documents().await
    }

    pub fn state(&self) -> LoadState {
        self.lock_state().clone()
    }

    /// Loads the document with catalog id `id` and makes it the displayed one.
    ///
    /// The request is ordered when it is made, before the catalog lookup, so
    /// a later select always wins over an earlier one whose lookup or fetch
    /// finishes last.
    pub async fn select(&self, id: &str) -> SelectOutcome {
        let token = self.requests.issue();

        let Some(entry) = self.catalog.find(id).await else {
            log::warn!("No document with id {id:?}");
            let mut state = self.lock_state();
            // An earlier load this request overtook would otherwise stay Loading.
            if self.requests.is_current(token) && state.is_loading() {
                *state = LoadState::Idle;
            }
            return SelectOutcome::UnknownDocument;
        };

        {
            let mut state = self.lock_state();
            if !self.requests.is_current(token) {
                log::debug!("request {} superseded during lookup", token.value());
                return SelectOutcome::Superseded;
            }
            *state = LoadState::Loading {
                entry: entry.clone(),
            };
        }
        // Attempts waiting on the previous document would scroll the new one.
        self.navigator.cancel(ScrollTrigger::ContentAvailable);
        log::debug!("request {} loading {}", token.value(), entry.filename());

        let fetch = self.catalog.source().fetch_text(entry.filename());
        let next = match tokio::time::timeout(self.options.fetch_timeout, fetch).await {
            Ok(Ok(text)) => LoadState::Ready(Arc::new(LoadedDocument {
                doc: parse_document(&text),
                entry,
            })),
            Ok(Err(e)) => {
                log::warn!("Error loading doc {}: {e}", entry.filename());
                LoadState::Failed {
                    entry,
                    reason: e.to_string(),
                }
            }
            Err(_) => {
                log::warn!(
                    "Loading doc {} timed out after {:?}",
                    entry.filename(),
                    self.options.fetch_timeout
                );
                LoadState::Failed {
                    entry,
                    reason: format!("timed out after {:?}", self.options.fetch_timeout),
                }
            }
        };

        let ready = matches!(next, LoadState::Ready(_));
        {
            let mut state = self.lock_state();
            if !self.requests.is_current(token) {
                log::debug!("request {} superseded, response dropped", token.value());
                return SelectOutcome::Superseded;
            }
            *state = next;
        }
        if ready {
            self.navigator.on_content_available();
        }
        SelectOutcome::Applied
    }

    /// Selects the first catalog entry.
    pub async fn open_default(&self) -> SelectOutcome {
        match self.catalog.default_entry().await {
            Some(entry) => self.select(entry.id()).await,
            None => SelectOutcome::UnknownDocument,
        }
    }

    /// Follows a link from the rendered document.
    ///
    /// Anchor links go to the navigator. Relative links naming a catalog file
    /// (`./SECURITY.md#keys`) select that document and carry the fragment
    /// over. Everything else is handed back as external.
    pub async fn open_link(&self, href: &str) -> LinkOutcome {
        let target = match self.navigator.follow_link(href) {
            LinkAction::Anchor(id) => return LinkOutcome::Anchor(id),
            LinkAction::External(target) => target,
        };

        let (path, fragment) = target.split_once('#').unwrap_or((target.as_str(), ""));
        let filename = path.rsplit('/').next().unwrap_or(path);
        if path.contains("://") || !is_markdown(filename) {
            return LinkOutcome::External(target);
        }

        let documents = self.documents().await;
        let Some(entry) = documents.iter().find(|e| e.filename() == filename) else {
            return LinkOutcome::External(target);
        };

        self.navigator.set_fragment(fragment);
        let outcome = self.select(entry.id()).await;
        LinkOutcome::Document {
            id: entry.id().to_string(),
            outcome,
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, LoadState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
