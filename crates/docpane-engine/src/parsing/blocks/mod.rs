//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    from local facts only (fence marker, table row, heading marker, blank...)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` threads an explicit
//!    `ParserState` (flow, open fence, open table) through the lines and emits
//!    `BlockNode`s in line order
//!
//! ## Modules
//!
//! - **`types`**: The `BlockNode` enum
//! - **`kinds`**: Block-specific types with owned markers (CodeFence, TableRow, Heading...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A table is flushed before whatever non-table line follows it
//! - No input is rejected; unmatched constructs degrade to paragraphs

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::BlockNode;
