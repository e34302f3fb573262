/// Bold emphasis with owned delimiter constant.
///
/// The content between the delimiters must be at least one character and may
/// not contain `*`, so `***` runs never produce an empty bold span.
pub struct Bold;

impl Bold {
    /// Opening and closing delimiter.
    pub const DELIM: &'static [u8; 2] = b"**";
    /// Byte that may not appear inside bold content.
    pub const STAR: u8 = b'*';
}
