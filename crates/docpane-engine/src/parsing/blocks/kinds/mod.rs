//! Block-specific types that own their syntax markers.
//!
//! The classifier asks these types whether a line opens, continues or closes
//! their block; it never hardcodes a marker itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::ListItem;
pub use paragraph::Paragraph;
pub use table::TableRow;
pub use thematic_break::ThematicBreak;
