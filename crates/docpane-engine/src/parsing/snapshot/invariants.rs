use crate::anchors::slugify;
use crate::parsing::blocks::BlockNode;

/// Validates parser output invariants.
///
/// Asserts that:
/// - Heading levels are within 1..=4
/// - Every anchor id is the slug of its heading text
/// - Tables have at least one header cell
/// - Code block languages are never `Some("")`
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(blocks: &[BlockNode]) {
    for (idx, b) in blocks.iter().enumerate() {
        match b {
            BlockNode::Heading {
                level,
                text,
                anchor_id,
            } => {
                assert!(
                    (1..=4).contains(level),
                    "heading level out of range at block {idx}: {level}"
                );
                assert_eq!(
                    anchor_id,
                    &slugify(text),
                    "anchor id not derived from heading text at block {idx}"
                );
            }
            BlockNode::Table { headers, .. } => {
                assert!(!headers.is_empty(), "table without headers at block {idx}");
            }
            BlockNode::CodeBlock { language, .. } => {
                assert_ne!(
                    language.as_deref(),
                    Some(""),
                    "empty language tag at block {idx}"
                );
            }
            _ => {}
        }
    }
}
