//! Behavioural tests for the block parser.
//!
//! Fixture snapshots live in the crate's `tests/` directory; these tests pin
//! individual rules and edge cases.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::anchors::slugify;
use crate::parsing::{
    blocks::BlockNode,
    inline::{InlineSpan, tokenize},
    parse_document, snapshot,
};

fn text(s: &str) -> InlineSpan {
    InlineSpan::Text(s.to_string())
}

fn paragraph(s: &str) -> BlockNode {
    BlockNode::Paragraph {
        spans: vec![text(s)],
    }
}

#[test]
fn getting_started_example() {
    let doc = parse_document("# Getting Started\n\nSee [docs](#usage) for more.");
    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::Heading {
                level: 1,
                text: "Getting Started".to_string(),
                anchor_id: "getting-started".to_string(),
            },
            BlockNode::Spacer,
            BlockNode::Paragraph {
                spans: vec![
                    text("See "),
                    InlineSpan::Link {
                        label: "docs".to_string(),
                        href: "#usage".to_string(),
                        is_anchor_link: true,
                    },
                    text(" for more."),
                ],
            },
        ]
    );
}

#[test]
fn bold_and_code_example() {
    let doc = parse_document("**bold** and `code`");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::Paragraph {
            spans: vec![
                InlineSpan::Bold("bold".to_string()),
                text(" and "),
                InlineSpan::InlineCode("code".to_string()),
            ],
        }]
    );
}

#[test]
fn empty_document() {
    assert!(parse_document("").blocks.is_empty());
}

#[test]
fn trailing_newline_does_not_add_a_spacer() {
    assert_eq!(parse_document("text\n").blocks, vec![paragraph("text")]);
    assert_eq!(
        parse_document("text\n\n").blocks,
        vec![paragraph("text"), BlockNode::Spacer]
    );
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        parse_document("# A\r\nbody\r\n").blocks,
        vec![
            BlockNode::Heading {
                level: 1,
                text: "A".to_string(),
                anchor_id: "a".to_string(),
            },
            paragraph("body"),
        ]
    );
}

#[test]
fn blank_lines_become_spacers() {
    assert_eq!(
        parse_document("\n\n\n").blocks,
        vec![BlockNode::Spacer, BlockNode::Spacer, BlockNode::Spacer]
    );
}

#[rstest]
#[case("# One", 1, "One", "one")]
#[case("## Two Words", 2, "Two Words", "two-words")]
#[case("### API: `init()`", 3, "API: `init()`", "api-init")]
#[case("#### EIP-7702 & You!", 4, "EIP-7702 & You!", "eip-7702-you")]
fn headings_carry_slugs(
    #[case] line: &str,
    #[case] level: u8,
    #[case] heading: &str,
    #[case] anchor: &str,
) {
    assert_eq!(
        parse_document(line).blocks,
        vec![BlockNode::Heading {
            level,
            text: heading.to_string(),
            anchor_id: anchor.to_string(),
        }]
    );
}

#[test]
fn duplicate_headings_share_an_anchor() {
    let doc = parse_document("## Setup\ntext\n## Setup");
    let ids: Vec<_> = doc.headings().map(|h| h.anchor_id).collect();
    assert_eq!(ids, vec!["setup", "setup"]);
    assert_eq!(doc.find_heading("setup").map(|h| h.index), Some(0));
}

#[test]
fn code_fence_is_a_raw_zone() {
    let doc = parse_document("```rust\n# not a heading\n| not | table |\n\n```");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::CodeBlock {
            language: Some("rust".to_string()),
            lines: vec![
                "# not a heading".to_string(),
                "| not | table |".to_string(),
                String::new(),
            ],
        }]
    );
}

#[test]
fn fence_without_language() {
    let doc = parse_document("```\nplain\n```");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::CodeBlock {
            language: None,
            lines: vec!["plain".to_string()],
        }]
    );
}

#[test]
fn any_backtick_line_closes_the_fence() {
    let doc = parse_document("```sh\necho\n```text\nafter");
    assert_eq!(
        doc.blocks,
        vec![
            BlockNode::CodeBlock {
                language: Some("sh".to_string()),
                lines: vec!["echo".to_string()],
            },
            paragraph("after"),
        ]
    );
}

#[test]
fn unterminated_fence_is_flushed_at_end_of_input() {
    let doc = parse_document("intro\n```js\nlet a = 1;\nlet b = 2;");
    assert_eq!(
        doc.blocks,
        vec![
            paragraph("intro"),
            BlockNode::CodeBlock {
                language: Some("js".to_string()),
                lines: vec!["let a = 1;".to_string(), "let b = 2;".to_string()],
            },
        ]
    );
}

#[test]
fn well_formed_table_counts_match() {
    let md = "| Name | Type | Notes |\n|------|:----:|------:|\n| a | u8 | x |\n| b | u16 | y |\n| c | u32 | z |\n\nafter";
    let doc = parse_document(md);
    match &doc.blocks[0] {
        BlockNode::Table { headers, rows } => {
            assert_eq!(headers.len(), 3);
            assert_eq!(rows.len(), 3);
            assert!(rows.iter().all(|r| r.len() == 3));
        }
        other => panic!("expected Table, got {other:?}"),
    }
    assert_eq!(doc.blocks[1], BlockNode::Spacer);
    assert_eq!(doc.blocks[2], paragraph("after"));
}

#[test]
fn table_cells_are_tokenized_but_links_are_not_resolved() {
    let doc = parse_document("| **k** | [v](#v) |\n|---|---|");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::Table {
            headers: vec![tokenize("**k**"), vec![text("[v](#v)")]],
            rows: vec![],
        }]
    );
}

#[test]
fn table_open_at_end_of_input_is_flushed() {
    let doc = parse_document("| h |\n|---|\n| r |");
    assert_eq!(
        doc.blocks,
        vec![BlockNode::Table {
            headers: vec![vec![text("h")]],
            rows: vec![vec![vec![text("r")]]],
        }]
    );
}

#[test]
fn table_is_flushed_before_following_blocks() {
    let doc = parse_document("| h |\n| r |\n---\n```\ncode\n```\n| h2 |");
    let kinds: Vec<&str> = doc
        .blocks
        .iter()
        .map(|b| match b {
            BlockNode::Table { .. } => "table",
            BlockNode::Separator => "separator",
            BlockNode::CodeBlock { .. } => "code",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["table", "separator", "code", "table"]);
}

#[test]
fn divider_row_without_header_is_dropped() {
    assert_eq!(parse_document("|---|---|").blocks, vec![]);
}

#[test]
fn blockquote_does_not_resolve_links() {
    assert_eq!(
        parse_document("> see [x](#x) **now**").blocks,
        vec![BlockNode::Blockquote {
            spans: vec![
                text("see [x](#x) "),
                InlineSpan::Bold("now".to_string())
            ],
        }]
    );
}

#[test]
fn list_items_resolve_links() {
    assert_eq!(
        parse_document("* [API](./API_REFERENCE.md)").blocks,
        vec![BlockNode::ListItem {
            spans: vec![InlineSpan::Link {
                label: "API".to_string(),
                href: "./API_REFERENCE.md".to_string(),
                is_anchor_link: false,
            }],
        }]
    );
}

#[test]
fn unsupported_constructs_degrade_to_paragraphs() {
    let doc = parse_document("1. ordered\n  - nested\n##### five\n>quote");
    assert_eq!(
        doc.blocks,
        vec![
            paragraph("1. ordered"),
            paragraph("  - nested"),
            paragraph("##### five"),
            paragraph(">quote"),
        ]
    );
}

#[test]
fn consecutive_quote_lines_are_not_merged() {
    let doc = parse_document("> one\n> two");
    assert_eq!(doc.blocks.len(), 2);
}

#[test]
fn plain_text_round_trip() {
    let md = "# Title\n\nIntro with **bold** and `code`.\n- item [link](#title)\n> quoted\n---\n```\nraw **line**\n```\n| a | b |\n|---|---|\n| 1 | 2 |";
    let doc = parse_document(md);
    assert_eq!(
        doc.plain_text(),
        "Title\n\nIntro with bold and code.\nitem link\nquoted\n\nraw **line**\na\tb\n1\t2"
    );
}

/// One inline token as written and as shown. Without link resolution the
/// link syntax stays visible.
fn inline_piece(links: bool) -> BoxedStrategy<(String, String)> {
    let word = "[a-z]{1,8}";
    prop_oneof![
        word.prop_map(|w| (w.clone(), w)),
        word.prop_map(|w| (format!("**{w}**"), w)),
        word.prop_map(|w| (format!("`{w}`"), w)),
        (word, word).prop_map(move |(label, target)| {
            let raw = format!("[{label}](#{target})");
            let shown = if links { label } else { raw.clone() };
            (raw, shown)
        }),
    ]
    .boxed()
}

fn inline_line(links: bool) -> impl Strategy<Value = (String, String)> {
    proptest::collection::vec(inline_piece(links), 1..5).prop_map(|pieces| {
        let (raw, shown): (Vec<_>, Vec<_>) = pieces.into_iter().unzip();
        (raw.join(" "), shown.join(" "))
    })
}

/// A block as source lines plus the lines `plain_text` should give for it.
fn markup_block() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    let cells = proptest::collection::vec(inline_line(false), 1..4);
    prop_oneof![
        inline_line(true).prop_map(|(raw, shown)| (vec![raw], vec![shown])),
        inline_line(true).prop_map(|(raw, shown)| (vec![format!("- {raw}")], vec![shown])),
        inline_line(false).prop_map(|(raw, shown)| (vec![format!("> {raw}")], vec![shown])),
        (1..=4usize, inline_line(true)).prop_map(|(level, (raw, _))| {
            (vec![format!("{} {raw}", "#".repeat(level))], vec![raw])
        }),
        proptest::collection::vec(cells, 1..4).prop_map(|rows| {
            let mut source = vec![];
            let mut shown = vec![];
            for (i, row) in rows.into_iter().enumerate() {
                let (raw, visible): (Vec<_>, Vec<_>) = row.into_iter().unzip();
                source.push(format!("| {} |", raw.join(" | ")));
                if i == 0 {
                    source.push("|---|".to_string());
                }
                shown.push(visible.join("\t"));
            }
            (source, shown)
        }),
        ("[a-z]{0,5}", proptest::collection::vec("[a-z*#>| -]{0,12}", 0..4)).prop_map(
            |(language, body)| {
                let mut source = vec![format!("```{language}")];
                source.extend(body.iter().cloned());
                source.push("```".to_string());
                (source, body)
            }
        ),
        Just((vec![String::new()], vec![String::new()])),
        Just((vec!["---".to_string()], vec![String::new()])),
    ]
}

proptest! {
    #[test]
    fn parser_is_total_and_keeps_invariants(md in "(\\PC{0,20}\n){0,12}") {
        let doc = parse_document(&md);
        snapshot::invariants(&doc.blocks);
    }

    #[test]
    fn markup_free_lines_round_trip(lines in proptest::collection::vec("[a-z][a-z ]{0,15}", 1..8)) {
        let md = lines.join("\n");
        let doc = parse_document(&md);
        prop_assert_eq!(doc.plain_text(), md);
    }

    #[test]
    fn markup_lines_round_trip_to_visible_text(
        blocks in proptest::collection::vec(markup_block(), 1..8)
    ) {
        let mut source = vec![];
        let mut expected = vec![];
        for (lines, shown) in blocks {
            source.extend(lines);
            expected.extend(shown);
        }
        // A trailing blank line would be dropped by `str::lines`.
        source.push("end".to_string());
        expected.push("end".to_string());

        let doc = parse_document(&source.join("\n"));
        prop_assert_eq!(doc.plain_text(), expected.join("\n"));
    }

    #[test]
    fn heading_anchor_is_slug_of_text(heading in "[A-Za-z0-9 ,.!?'-]{1,30}") {
        let doc = parse_document(&format!("## {heading}"));
        prop_assert_eq!(doc.blocks.len(), 1);
        let expected_slug = slugify(&heading);
        prop_assert_eq!(doc.blocks[0].anchor_id(), Some(expected_slug.as_str()));
    }
}
