use super::kinds::{
    BlockQuote, CodeFence, Heading, ListItem, Paragraph, TableRow, ThematicBreak,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether a fence marker opens or
/// closes, and whether a line is swallowed by an open fence, is decided by the
/// builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Line starting with ```` ``` ````; carries the trimmed info string.
    FenceMarker { info: &'a str },
    /// `---` on its own.
    ThematicBreak,
    /// Pipe-bounded row whose cells are all `-`/`:`.
    TableDivider,
    /// Pipe-bounded row with content cells.
    TableRow(Vec<&'a str>),
    /// `> ` quote; carries the text after the prefix.
    BlockQuote(&'a str),
    /// `#`..`####` heading.
    Heading { level: u8, text: &'a str },
    /// `- ` or `* ` item; carries the text after the marker.
    ListItem(&'a str),
    /// Any other non-blank line, verbatim.
    Text(&'a str),
    Blank,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Rules are tried in precedence order: fence, thematic break, table,
    /// blockquote, heading, list item, paragraph text, blank.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(info) = CodeFence::info(line) {
            return LineClass::FenceMarker { info };
        }
        if ThematicBreak::matches(line) {
            return LineClass::ThematicBreak;
        }
        if let Some(cells) = TableRow::cells(line) {
            return if TableRow::is_divider(&cells) {
                LineClass::TableDivider
            } else {
                LineClass::TableRow(cells)
            };
        }
        if let Some(text) = BlockQuote::strip(line) {
            return LineClass::BlockQuote(text);
        }
        if let Some((level, text)) = Heading::strip(line) {
            return LineClass::Heading { level, text };
        }
        if let Some(text) = ListItem::strip(line) {
            return LineClass::ListItem(text);
        }
        if Paragraph::is_content(line) {
            return LineClass::Text(line);
        }
        LineClass::Blank
    }
}
