/// Inline code type with owned delimiter constant.
///
/// Code spans are recognised by splitting a literal segment on the tick:
/// odd-positioned pieces are code, even-positioned pieces are text.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
}
