//! Seams to whatever renders the document.
//!
//! A browser, a terminal pane or a test double all implement the same three
//! traits; the navigator never touches rendering state directly.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// The rendered document as seen from the scroll position.
pub trait Viewport: Send + Sync {
    /// Top of the element carrying `anchor_id`, relative to the visible area.
    fn locate(&self, anchor_id: &str) -> Option<f64>;

    fn scroll_offset(&self) -> f64;

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);
}

/// The address of the current view.
pub trait Location: Send + Sync {
    /// The part after `#`, if any.
    fn fragment(&self) -> Option<String>;

    /// Replaces the fragment in place. Must not notify the navigator itself.
    fn set_fragment(&self, anchor_id: &str);

    /// Origin plus path, without fragment.
    fn base_url(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Normalizes a raw fragment: a leading `#` is tolerated, empty means none.
pub fn normalize_fragment(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let id = raw.strip_prefix('#').unwrap_or(&raw);
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
