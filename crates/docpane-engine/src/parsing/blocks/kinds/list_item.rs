/// Unordered, single-level list item.
pub struct ListItem;

impl ListItem {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    pub fn strip(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(*marker))
    }
}
