use regex::Regex;
use std::sync::OnceLock;

pub const MARKDOWN_EXT: &str = ".md";

const ZK_TITLE: &str = "ZK Proofs";
const ZK_FILENAMES: [&str; 3] = ["ZK.MD", "ZERO-KNOWLEDGE.MD", "ZERO_KNOWLEDGE.MD"];

/// Whether `filename` has a markdown extension, in any case.
pub fn is_markdown(filename: &str) -> bool {
    filename.len() > MARKDOWN_EXT.len()
        && filename
            .get(filename.len() - MARKDOWN_EXT.len()..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MARKDOWN_EXT))
}

/// `filename` without a trailing markdown extension.
fn stem(filename: &str) -> &str {
    if is_markdown(filename) {
        &filename[..filename.len() - MARKDOWN_EXT.len()]
    } else {
        filename
    }
}

/// URL-friendly identifier: `EIP_7702.md` → `eip-7702`.
pub fn id_for(filename: &str) -> String {
    stem(filename).to_lowercase().replace('_', "-")
}

/// Human-readable title: `API_REFERENCE.md` → `Api Reference`.
///
/// Acronym words (`eip`, `zk`, numbers) are upper-cased and every other word
/// capitalised. Empty words between repeated separators are kept, so
/// `A--B.md` becomes `A  B`.
pub fn title_for(filename: &str) -> String {
    let upper = filename.to_uppercase();
    if ZK_FILENAMES.contains(&upper.as_str()) {
        return ZK_TITLE.to_string();
    }

    static ACRONYM: OnceLock<Regex> = OnceLock::new();
    let acronym = ACRONYM.get_or_init(|| {
        Regex::new(r"(?i)^(eip|zk|[0-9]+)$").expect("Invalid acronym regex")
    });

    stem(filename)
        .replace('_', "-")
        .split('-')
        .map(|word| {
            if acronym.is_match(word) {
                word.to_uppercase()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
