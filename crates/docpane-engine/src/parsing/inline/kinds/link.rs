/// Markdown link `[label](href)` with owned delimiter constants.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const HREF_OPEN: u8 = b'(';
    pub const HREF_CLOSE: u8 = b')';
    /// Hrefs starting with this prefix point at a heading in the current document.
    pub const ANCHOR_PREFIX: char = '#';

    /// Whether `href` is an in-page anchor link.
    pub fn is_anchor(href: &str) -> bool {
        href.starts_with(Self::ANCHOR_PREFIX)
    }
}
