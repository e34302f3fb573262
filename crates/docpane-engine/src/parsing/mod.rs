pub mod blocks;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

use serde::Serialize;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};

/// A fully parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// A heading as seen by navigation: where it sits and what it is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingRef<'a> {
    /// Index into [`ParsedDoc::blocks`].
    pub index: usize,
    pub level: u8,
    pub text: &'a str,
    pub anchor_id: &'a str,
}

/// Parses a whole document in one synchronous pass.
///
/// Total over all inputs: malformed constructs degrade, nothing fails.
pub fn parse_document(text: &str) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.lines() {
        let lc = classifier.classify(line);
        builder.push(line, lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

impl ParsedDoc {
    /// Headings in document order.
    pub fn headings(&self) -> impl Iterator<Item = HeadingRef<'_>> {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(index, block)| match block {
                BlockNode::Heading {
                    level,
                    text,
                    anchor_id,
                } => Some(HeadingRef {
                    index,
                    level: *level,
                    text,
                    anchor_id,
                }),
                _ => None,
            })
    }

    /// The first heading carrying `anchor_id`.
    ///
    /// Identical heading texts share an identifier; later duplicates are
    /// unreachable by fragment.
    pub fn find_heading(&self, anchor_id: &str) -> Option<HeadingRef<'_>> {
        self.headings().find(|h| h.anchor_id == anchor_id)
    }

    /// Visible text of every block, one line per output line.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .flat_map(BlockNode::plain_lines)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
