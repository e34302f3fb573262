use serde::Serialize;

use crate::parsing::inline::{InlineRun, run_text};

/// One structural unit of a parsed document.
///
/// Nodes own their text; a parsed tree never borrows from the source, and a
/// new tree is built for every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockNode {
    /// `#` to `####` heading. `text` is kept verbatim (no inline parsing).
    Heading {
        /// 1 to 4.
        level: u8,
        text: String,
        /// Slug of `text`, used as the fragment identifier.
        anchor_id: String,
    },
    Paragraph {
        spans: InlineRun,
    },
    /// Single-level `- ` or `* ` item.
    ListItem {
        spans: InlineRun,
    },
    /// Single-line `> ` quote.
    Blockquote {
        spans: InlineRun,
    },
    /// Fenced code block; lines are kept verbatim.
    CodeBlock {
        language: Option<String>,
        lines: Vec<String>,
    },
    /// Pipe table; every cell is inline-tokenized.
    Table {
        headers: Vec<InlineRun>,
        rows: Vec<Vec<InlineRun>>,
    },
    /// Thematic break (`---`).
    Separator,
    /// Blank-line placeholder.
    Spacer,
}

impl BlockNode {
    /// The visible text of the block without markup, one entry per output line.
    ///
    /// Table cells are joined with a tab; separators and spacers yield an
    /// empty line.
    pub fn plain_lines(&self) -> Vec<String> {
        match self {
            BlockNode::Heading { text, .. } => vec![text.clone()],
            BlockNode::Paragraph { spans }
            | BlockNode::ListItem { spans }
            | BlockNode::Blockquote { spans } => vec![run_text(spans)],
            BlockNode::CodeBlock { lines, .. } => lines.clone(),
            BlockNode::Table { headers, rows } => std::iter::once(headers)
                .chain(rows)
                .map(|row| {
                    row.iter()
                        .map(|cell| run_text(cell))
                        .collect::<Vec<_>>()
                        .join("\t")
                })
                .collect(),
            BlockNode::Separator | BlockNode::Spacer => vec![String::new()],
        }
    }

    /// Returns the anchor identifier if this block is a heading.
    pub fn anchor_id(&self) -> Option<&str> {
        match self {
            BlockNode::Heading { anchor_id, .. } => Some(anchor_id),
            _ => None,
        }
    }
}
