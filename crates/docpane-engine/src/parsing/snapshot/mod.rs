//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders parsed blocks as a stable, line-per-block text
//!   outline for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (heading levels,
//!   anchor ids derived from heading text, non-empty table headers)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by fixture documents and their snapshots rather
//! than a separate formal grammar.

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
