/// A pipe-bounded table row with owned delimiter.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// Splits a pipe-bounded line into trimmed cells.
    ///
    /// The empty boundary pieces before the first and after the last pipe are
    /// dropped. Returns `None` if the trimmed line does not start and end with
    /// a pipe.
    pub fn cells(line: &str) -> Option<Vec<&str>> {
        let trimmed = line.trim();
        if !(trimmed.starts_with(Self::PIPE) && trimmed.ends_with(Self::PIPE)) {
            return None;
        }
        // A lone `|` splits into two boundary pieces and yields no cells.
        let pieces: Vec<&str> = trimmed.split(Self::PIPE).collect();
        let inner = pieces.get(1..pieces.len().saturating_sub(1)).unwrap_or(&[]);
        Some(inner.iter().map(|cell| cell.trim()).collect())
    }

    /// A divider row has only `-`/`:` cells (`|---|:---:|`).
    ///
    /// A row with no cells counts as a divider.
    pub fn is_divider(cells: &[&str]) -> bool {
        cells
            .iter()
            .all(|cell| !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':'))
    }
}
