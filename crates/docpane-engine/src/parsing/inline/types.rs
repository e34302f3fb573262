use serde::Serialize;

/// One styled piece of inline text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineSpan {
    /// Unstyled text.
    Text(String),
    /// Content of a `**...**` run, delimiters removed.
    Bold(String),
    /// Content between backticks, delimiters removed.
    InlineCode(String),
    /// A `[label](href)` link.
    Link {
        label: String,
        href: String,
        /// `true` when `href` targets a fragment in the current document.
        is_anchor_link: bool,
    },
}

/// Ordered, non-overlapping spans making up one block's inline content.
pub type InlineRun = Vec<InlineSpan>;

impl InlineSpan {
    /// The visible text of the span, without markup. Links contribute their label.
    pub fn literal(&self) -> &str {
        match self {
            InlineSpan::Text(s) | InlineSpan::Bold(s) | InlineSpan::InlineCode(s) => s,
            InlineSpan::Link { label, .. } => label,
        }
    }
}

/// Concatenates the visible text of every span in a run.
pub fn run_text(run: &[InlineSpan]) -> String {
    run.iter().map(InlineSpan::literal).collect()
}
