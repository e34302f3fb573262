use crate::anchors::slugify;
use crate::parsing::inline::{InlineRun, parse_with_links, tokenize};

use super::{classify::LineClass, kinds::CodeFence, types::BlockNode};

/// What the builder is in the middle of between two lines.
///
/// At most one multi-line construct is open at a time; a fence can never be
/// open while a table is being accumulated.
#[derive(Debug, Default)]
enum ParserState {
    #[default]
    Flow,
    Fence {
        language: Option<String>,
        lines: Vec<String>,
    },
    Table {
        headers: Vec<InlineRun>,
        rows: Vec<Vec<InlineRun>>,
    },
}

/// Phase 2 of block parsing: turns classified lines into [`BlockNode`]s.
pub struct BlockBuilder {
    state: ParserState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: ParserState::Flow,
            out: vec![],
        }
    }

    /// Feeds one line and its classification.
    ///
    /// `line` is the raw text, needed verbatim while a fence is open.
    pub fn push(&mut self, line: &str, class: LineClass<'_>) {
        if self.in_fence() {
            match class {
                LineClass::FenceMarker { .. } => self.close_fence(),
                _ => self.buffer_fence_line(line),
            }
            return;
        }

        match class {
            LineClass::TableRow(cells) => self.push_table_row(&cells),
            // Divider rows carry no content, inside or outside a table.
            LineClass::TableDivider => {}
            LineClass::FenceMarker { info } => {
                self.flush_table();
                self.state = ParserState::Fence {
                    language: CodeFence::language(info),
                    lines: vec![],
                };
            }
            LineClass::ThematicBreak => self.emit(BlockNode::Separator),
            LineClass::BlockQuote(text) => self.emit(BlockNode::Blockquote {
                spans: tokenize(text),
            }),
            LineClass::Heading { level, text } => self.emit(BlockNode::Heading {
                level,
                text: text.to_string(),
                anchor_id: slugify(text),
            }),
            LineClass::ListItem(text) => self.emit(BlockNode::ListItem {
                spans: parse_with_links(text),
            }),
            LineClass::Text(text) => self.emit(BlockNode::Paragraph {
                spans: parse_with_links(text),
            }),
            LineClass::Blank => self.emit(BlockNode::Spacer),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_table();
        if self.in_fence() {
            log::debug!("unterminated code fence flushed at end of input");
            self.close_fence();
        }
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.state, ParserState::Fence { .. })
    }

    /// Pushes a single-line block, closing any table that precedes it.
    fn emit(&mut self, block: BlockNode) {
        self.flush_table();
        self.out.push(block);
    }

    fn buffer_fence_line(&mut self, line: &str) {
        if let ParserState::Fence { lines, .. } = &mut self.state {
            lines.push(line.to_string());
        }
    }

    fn close_fence(&mut self) {
        let prev = std::mem::take(&mut self.state);
        if let ParserState::Fence { language, lines } = prev {
            self.out.push(BlockNode::CodeBlock { language, lines });
        } else {
            self.state = prev;
        }
    }

    fn push_table_row(&mut self, cells: &[&str]) {
        let cells: Vec<InlineRun> = cells.iter().map(|cell| tokenize(cell)).collect();
        if let ParserState::Table { rows, .. } = &mut self.state {
            rows.push(cells);
        } else {
            self.state = ParserState::Table {
                headers: cells,
                rows: vec![],
            };
        }
    }

    fn flush_table(&mut self) {
        let prev = std::mem::take(&mut self.state);
        if let ParserState::Table { headers, rows } = prev {
            self.out.push(BlockNode::Table { headers, rows });
        } else {
            self.state = prev; // put back non-table state
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
