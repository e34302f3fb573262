/// ATX heading with owned markers, levels one to four.
pub struct Heading;

impl Heading {
    /// Markers in level order; each includes the mandatory trailing space.
    pub const MARKERS: [&'static str; 4] = ["# ", "## ", "### ", "#### "];

    /// Returns `(level, text)` if `line` is a heading.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        Self::MARKERS
            .iter()
            .zip(1u8..)
            .find_map(|(marker, level)| line.strip_prefix(*marker).map(|text| (level, text)))
    }
}
