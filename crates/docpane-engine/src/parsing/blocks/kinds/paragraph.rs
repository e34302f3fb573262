/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default for any non-blank
/// line no other block claims. Paragraphs never span lines.
pub struct Paragraph;

impl Paragraph {
    /// Whether `line` carries paragraph content.
    pub fn is_content(line: &str) -> bool {
        !line.trim().is_empty()
    }
}
