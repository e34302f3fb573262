/// Single-line blockquote with owned prefix constant.
///
/// Quotes are not merged across lines and not nested: `> > x` is a quote
/// whose content is `> x`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, including the mandatory space.
    pub const PREFIX: &'static str = "> ";

    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
