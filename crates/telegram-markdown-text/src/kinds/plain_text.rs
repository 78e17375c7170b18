use crate::error::Result;
use crate::fragment::Fragment;
use crate::part::Part;

/// Leaf text, escaped on render.
///
/// Use [`Fragment::plain`] when the argument is statically known to be text.
pub struct PlainText;

impl PlainText {
    pub fn new(text: impl Into<Part>) -> Result<Fragment> {
        let text = text.into().into_text("text")?;
        Ok(Fragment::plain(text))
    }
}
