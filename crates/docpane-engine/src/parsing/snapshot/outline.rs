use crate::parsing::blocks::BlockNode;
use crate::parsing::inline::InlineSpan;

/// Renders blocks as a text outline, one header line per block.
///
/// Code lines and table rows are listed indented beneath their block.
pub fn outline(blocks: &[BlockNode]) -> String {
    let mut lines = Vec::new();

    for b in blocks {
        match b {
            BlockNode::Heading {
                level,
                text,
                anchor_id,
            } => lines.push(format!("Heading(h{level}) #{anchor_id} {text:?}")),
            BlockNode::Paragraph { spans } => lines.push(with_spans("Paragraph", spans)),
            BlockNode::ListItem { spans } => lines.push(with_spans("ListItem", spans)),
            BlockNode::Blockquote { spans } => lines.push(with_spans("Blockquote", spans)),
            BlockNode::CodeBlock { language, lines: code } => {
                lines.push(format!(
                    "CodeBlock lang={} ({} lines)",
                    language.as_deref().unwrap_or("-"),
                    code.len()
                ));
                lines.extend(code.iter().map(|l| format!("    {l:?}")));
            }
            BlockNode::Table { headers, rows } => {
                lines.push(format!("Table cols={} rows={}", headers.len(), rows.len()));
                lines.push(format!("    header: {}", cells(headers)));
                lines.extend(rows.iter().map(|row| format!("    row: {}", cells(row))));
            }
            BlockNode::Separator => lines.push("Separator".to_string()),
            BlockNode::Spacer => lines.push("Spacer".to_string()),
        }
    }

    lines.join("\n")
}

fn with_spans(kind: &str, spans: &[InlineSpan]) -> String {
    let mut s = kind.to_string();
    for span in spans {
        s.push(' ');
        s.push_str(&span_label(span));
    }
    s
}

fn cells(row: &[Vec<InlineSpan>]) -> String {
    row.iter()
        .map(|cell| {
            let inner: Vec<String> = cell.iter().map(span_label).collect();
            format!("[{}]", inner.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn span_label(span: &InlineSpan) -> String {
    match span {
        InlineSpan::Text(s) => format!("Text({s:?})"),
        InlineSpan::Bold(s) => format!("Bold({s:?})"),
        InlineSpan::InlineCode(s) => format!("Code({s:?})"),
        InlineSpan::Link {
            label,
            href,
            is_anchor_link: true,
        } => format!("AnchorLink({label:?} -> {href:?})"),
        InlineSpan::Link { label, href, .. } => format!("Link({label:?} -> {href:?})"),
    }
}
