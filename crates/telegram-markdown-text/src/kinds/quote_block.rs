use crate::error::Result;
use crate::fragment::{Fragment, FragmentKind};
use crate::part::Part;

/// Block quote with owned prefix and terminator constants.
///
/// A quote block does not start a new line by itself: it must be placed at
/// the start of the message or right after a newline.
pub struct QuoteBlock;

impl QuoteBlock {
    /// Prefix for every non-empty quoted line.
    pub const PREFIX: char = '>';

    /// Appended verbatim after the last quoted line.
    pub const TERMINATOR: &'static str = "**\r";

    pub fn new<I>(parts: I) -> Result<Fragment>
    where
        I: IntoIterator,
        I::Item: Into<Part>,
    {
        Fragment::collect(FragmentKind::QuoteBlock, parts)
    }

    pub(crate) fn render(inner: &str) -> String {
        let mut out = String::with_capacity(inner.len() + 16);
        for (i, line) in inner.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if !line.is_empty() {
                out.push(Self::PREFIX);
            }
            out.push_str(line);
        }
        out.push_str(Self::TERMINATOR);
        out
    }
}
