//! # Inline Parsing
//!
//! Converts one line of block content into an [`InlineRun`].
//!
//! ## Architecture
//!
//! Inline parsing runs after block classification has stripped the block
//! marker (`> `, `- `, `# `...). It is deliberately flat: a bold pass followed
//! by an inline-code pass, plus an outer link pass for list items and
//! paragraphs. There is no recursive nesting.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, InlineCode, Link) and `InlineRun`
//! - **`kinds`**: Inline-specific types with owned delimiters (Bold, CodeSpan, Link)
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`parser`**: `tokenize()` and `parse_with_links()` entry points
//!
//! ## Pass Precedence
//!
//! Links are resolved on the raw line first, then bold, then inline code.
//! `` `**x**` `` therefore yields a bold `x` between two code pieces, not code
//! containing asterisks.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_with_links, tokenize};
pub use types::{InlineRun, InlineSpan, run_text};
