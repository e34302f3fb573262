use std::sync::Arc;

use crate::catalog::CatalogEntry;
use crate::parsing::ParsedDoc;

/// Text shown in place of a document that could not be retrieved.
pub const FAILED_TO_LOAD: &str = "Failed to load documentation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub entry: CatalogEntry,
    pub doc: ParsedDoc,
}

/// What the host should currently display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        entry: CatalogEntry,
    },
    Ready(Arc<LoadedDocument>),
    Failed {
        entry: CatalogEntry,
        reason: String,
    },
}

impl LoadState {
    pub fn entry(&self) -> Option<&CatalogEntry> {
        match self {
            LoadState::Idle => None,
            LoadState::Loading { entry } | LoadState::Failed { entry, .. } => Some(entry),
            LoadState::Ready(loaded) => Some(&loaded.entry),
        }
    }

    pub fn document(&self) -> Option<&Arc<LoadedDocument>> {
        match self {
            LoadState::Ready(loaded) => Some(loaded),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    /// Placeholder text for a failed load.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            LoadState::Failed { .. } => Some(FAILED_TO_LOAD),
            _ => None,
        }
    }
}

/// How a select request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The result (document or failure) is now the displayed state.
    Applied,
    /// A newer request was issued while this one was in flight.
    Superseded,
    UnknownDocument,
}
