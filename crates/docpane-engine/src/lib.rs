pub mod anchors;
pub mod catalog;
pub mod io;
pub mod parsing;
pub mod viewer;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use anchors::*;
pub use catalog::{CatalogEntry, CatalogOptions, CatalogResolver, Clock, SystemClock};
pub use io::*;
pub use parsing::{
    HeadingRef, ParsedDoc,
    blocks::BlockNode,
    inline::{InlineRun, InlineSpan, parse_with_links, tokenize},
    parse_document,
};
pub use viewer::{
    DocumentViewer, FAILED_TO_LOAD, LinkOutcome, LoadState, LoadedDocument, SelectOutcome,
    ViewerOptions,
};
