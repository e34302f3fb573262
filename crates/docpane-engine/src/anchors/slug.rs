use regex::Regex;
use std::sync::OnceLock;

/// Derives a fragment identifier from heading text.
///
/// Lowercases, drops everything that is not an ASCII word character,
/// whitespace or `-`, turns whitespace runs into `-`, collapses repeated `-`
/// and trims `-` from both ends. The result only contains `[a-z0-9_-]`, so
/// applying it twice changes nothing.
pub fn slugify(text: &str) -> String {
    static STRIP: OnceLock<Regex> = OnceLock::new();
    static SPACES: OnceLock<Regex> = OnceLock::new();
    static DASHES: OnceLock<Regex> = OnceLock::new();

    let strip =
        STRIP.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("Invalid strip regex"));
    let spaces = SPACES.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));
    let dashes = DASHES.get_or_init(|| Regex::new(r"-{2,}").expect("Invalid dash regex"));

    let lowered = text.to_lowercase();
    let kept = strip.replace_all(&lowered, "");
    let hyphenated = spaces.replace_all(&kept, "-");
    let collapsed = dashes.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Shareable link to a heading: `base_url#anchor_id`.
///
/// `base_url` is origin plus path; any fragment it already carries is
/// replaced.
pub fn permalink(base_url: &str, anchor_id: &str) -> String {
    let base = base_url.split_once('#').map_or(base_url, |(base, _)| base);
    format!("{base}#{anchor_id}")
}
