use docpane_engine::{BlockNode, InlineSpan, parsing::inline::types::run_text};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A document laid out as terminal rows.
#[derive(Debug, Default)]
pub struct Rendered {
    pub lines: Vec<Line<'static>>,
    /// Heading anchor ids and the row each starts on; first heading wins.
    pub anchors: Vec<(String, usize)>,
}

const RULE_WIDTH: usize = 40;

pub fn render_blocks(blocks: &[BlockNode]) -> Rendered {
    let mut out = Rendered::default();

    for block in blocks {
        match block {
            BlockNode::Heading {
                level,
                text,
                anchor_id,
            } => {
                if !out.anchors.iter().any(|(id, _)| id == anchor_id) {
                    out.anchors.push((anchor_id.clone(), out.lines.len()));
                }
                out.lines.push(Line::from(vec![
                    Span::styled(format!("{} ", "#".repeat(*level as usize)), dim()),
                    Span::styled(text.clone(), heading_style(*level)),
                ]));
            }
            BlockNode::Paragraph { spans } => {
                out.lines.push(Line::from(styled_spans(spans)));
            }
            BlockNode::ListItem { spans } => {
                let mut line = vec![Span::raw("• ")];
                line.extend(styled_spans(spans));
                out.lines.push(Line::from(line));
            }
            BlockNode::Blockquote { spans } => {
                let mut line = vec![Span::styled("│ ", dim())];
                let italic = Style::default().add_modifier(Modifier::ITALIC);
                line.extend(
                    styled_spans(spans)
                        .into_iter()
                        .map(|s| s.patch_style(italic)),
                );
                out.lines.push(Line::from(line));
            }
            BlockNode::CodeBlock { language, lines } => {
                if let Some(language) = language {
                    out.lines
                        .push(Line::from(Span::styled(format!("┌ {language}"), dim())));
                }
                out.lines.extend(
                    lines
                        .iter()
                        .map(|l| Line::from(Span::styled(l.clone(), code_style()))),
                );
            }
            BlockNode::Table { headers, rows } => render_table(&mut out.lines, headers, rows),
            BlockNode::Separator => {
                out.lines
                    .push(Line::from(Span::styled("─".repeat(RULE_WIDTH), dim())));
            }
            BlockNode::Spacer => out.lines.push(Line::default()),
        }
    }

    out
}

fn render_table(
    out: &mut Vec<Line<'static>>,
    headers: &[Vec<InlineSpan>],
    rows: &[Vec<Vec<InlineSpan>>],
) {
    let mut widths: Vec<usize> = headers.iter().map(|c| width(c)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(width(cell)),
                None => widths.push(width(cell)),
            }
        }
    }

    let bold = Style::default().add_modifier(Modifier::BOLD);
    out.push(table_row(headers, &widths, Some(bold)));
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    out.push(Line::from(Span::styled(rule.join("─┼─"), dim())));
    out.extend(rows.iter().map(|row| table_row(row, &widths, None)));
}

fn table_row(
    cells: &[Vec<InlineSpan>],
    widths: &[usize],
    patch: Option<Style>,
) -> Line<'static> {
    let mut spans = vec![];
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", dim()));
        }
        for span in styled_spans(cell) {
            spans.push(match patch {
                Some(style) => span.patch_style(style),
                None => span,
            });
        }
        let pad = widths.get(i).copied().unwrap_or(0).saturating_sub(width(cell));
        if pad > 0 {
            spans.push(Span::raw(" ".repeat(pad)));
        }
    }
    Line::from(spans)
}

fn width(cell: &[InlineSpan]) -> usize {
    run_text(cell).chars().count()
}

fn styled_spans(spans: &[InlineSpan]) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Text(text) => Span::raw(text.clone()),
            InlineSpan::Bold(text) => {
                Span::styled(text.clone(), Style::default().add_modifier(Modifier::BOLD))
            }
            InlineSpan::InlineCode(text) => Span::styled(text.clone(), code_style()),
            InlineSpan::Link { label, .. } => Span::styled(
                label.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        })
        .collect()
}

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Magenta,
        2 => Color::Blue,
        _ => Color::Green,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn code_style() -> Style {
    Style::default().fg(Color::Yellow).bg(Color::Black)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}
