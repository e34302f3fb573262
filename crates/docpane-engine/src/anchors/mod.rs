//! # Anchors
//!
//! Heading identifiers and in-document navigation.
//!
//! - **`slug`**: `slugify` and `permalink`, pure functions shared with the parser
//! - **`host`**: `Viewport`, `Location` and `Clipboard`, implemented by the renderer
//! - **`navigator`**: `AnchorNavigator`, scheduling delayed, cancellable scroll
//!   attempts so a fragment resolves once the heading has been rendered

pub mod host;
pub mod navigator;
pub mod slug;

pub use host::{Clipboard, ClipboardError, Location, ScrollBehavior, Viewport};
pub use navigator::{
    AnchorNavigator, LinkAction, NavigatorOptions, PermalinkCopy, ScrollOutcome, ScrollTrigger,
};
pub use slug::{permalink, slugify};
