/// Thematic break with owned marker constant.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKER: &'static str = "---";

    /// Surrounding whitespace is ignored; `***` and longer runs are not breaks.
    pub fn matches(line: &str) -> bool {
        line.trim() == Self::MARKER
    }
}
