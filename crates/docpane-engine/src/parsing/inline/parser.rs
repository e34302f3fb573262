use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan, Link},
    types::{InlineRun, InlineSpan},
};

/// Tokenizes one line of inline text into styled spans.
///
/// Two fixed passes, never nested:
/// 1. bold runs `**...**` are cut out of the raw text;
/// 2. every remaining literal segment is split on backticks, odd pieces
///    becoming inline code.
///
/// Bold is therefore never recognised inside inline code and inline code never
/// inside bold. Link syntax is left untouched; see [`parse_with_links`].
pub fn tokenize(s: &str) -> InlineRun {
    let mut out = vec![];
    for segment in split_bold(s) {
        match segment {
            BoldSegment::Bold(inner) => out.push(InlineSpan::Bold(inner.to_string())),
            BoldSegment::Literal(text) => push_code_pieces(&mut out, text),
        }
    }
    out
}

/// Resolves `[label](href)` links first, then tokenizes the text around them.
///
/// Used for list items and paragraphs. Links must be found on the raw line
/// before emphasis splitting so brackets inside link syntax are not
/// mis-tokenized.
pub fn parse_with_links(s: &str) -> InlineRun {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        if let Some(link) = try_parse_link(&mut cur) {
            out.extend(tokenize(cur.slice(text_start, link.start)));
            out.push(InlineSpan::Link {
                label: link.label.to_string(),
                href: link.href.to_string(),
                is_anchor_link: Link::is_anchor(link.href),
            });
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    out.extend(tokenize(cur.slice(text_start, s.len())));
    out
}

enum BoldSegment<'a> {
    Bold(&'a str),
    Literal(&'a str),
}

fn split_bold(s: &str) -> Vec<BoldSegment<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        if let Some((start, inner)) = try_parse_bold(&mut cur) {
            if start > text_start {
                out.push(BoldSegment::Literal(cur.slice(text_start, start)));
            }
            out.push(BoldSegment::Bold(inner));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    if s.len() > text_start {
        out.push(BoldSegment::Literal(cur.slice(text_start, s.len())));
    }
    out
}

/// Attempts to parse `**content**` at the current position.
///
/// Returns the start offset and the inner content. On failure the cursor is
/// restored.
fn try_parse_bold<'a>(cur: &mut Cursor<'a>) -> Option<(usize, &'a str)> {
    if !cur.starts_with(Bold::DELIM) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Bold::DELIM.len());
    let inner_start = cur.pos();

    let consumed = cur.eat_until(Bold::STAR);
    if consumed == 0 || !cur.starts_with(Bold::DELIM) {
        *cur = saved;
        return None;
    }
    let inner = cur.slice(inner_start, cur.pos());
    cur.bump_n(Bold::DELIM.len());

    Some((start, inner))
}

fn push_code_pieces(out: &mut InlineRun, literal: &str) {
    for (idx, piece) in literal.split(CodeSpan::TICK).enumerate() {
        if idx % 2 == 1 {
            out.push(InlineSpan::InlineCode(piece.to_string()));
        } else if !piece.is_empty() {
            out.push(InlineSpan::Text(piece.to_string()));
        }
    }
}

struct LinkMatch<'a> {
    start: usize,
    label: &'a str,
    href: &'a str,
}

/// Attempts to parse `[label](href)` at the current position.
///
/// Label and href must both be non-empty. On failure the cursor is restored.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<LinkMatch<'a>> {
    if cur.peek() != Some(Link::LABEL_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let label_start = cur.pos();
    let label_len = cur.eat_until(Link::LABEL_CLOSE);
    let label_end = cur.pos();

    if label_len == 0 || !cur.starts_with(&[Link::LABEL_CLOSE, Link::HREF_OPEN]) {
        *cur = saved;
        return None;
    }
    cur.bump_n(2); // ](

    let href_start = cur.pos();
    let href_len = cur.eat_until(Link::HREF_CLOSE);
    let href_end = cur.pos();

    if href_len == 0 || cur.peek() != Some(Link::HREF_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(LinkMatch {
        start,
        label: cur.slice(label_start, label_end),
        href: cur.slice(href_start, href_end),
    })
}
