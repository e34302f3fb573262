//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIM = b"**"`
//! - **`CodeSpan`**: `TICK = '`'` - splits literal segments into code/text
//! - **`Link`**: `[label](href)` delimiters and the anchor-link prefix
//!
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod bold;
pub mod code_span;
pub mod link;

pub use bold::Bold;
pub use code_span::CodeSpan;
pub use link::Link;
