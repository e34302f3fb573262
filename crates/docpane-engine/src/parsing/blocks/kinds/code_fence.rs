/// Backtick code fence with owned marker constant.
///
/// Any line starting with the marker toggles the fence; the remainder of an
/// opening line is the language tag. Only backtick fences are recognised.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the info string (trimmed remainder) if `line` is a fence marker.
    pub fn info(line: &str) -> Option<&str> {
        line.strip_prefix(Self::BACKTICKS).map(str::trim)
    }

    /// Language tag for an opening fence; an empty info string means none.
    pub fn language(info: &str) -> Option<String> {
        if info.is_empty() {
            None
        } else {
            Some(info.to_string())
        }
    }
}
