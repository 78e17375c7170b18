use crate::error::Result;
use crate::fragment::{Fragment, FragmentKind};
use crate::part::Part;

use super::Style;

/// `` `text` ``
pub struct InlineCode;

impl InlineCode {
    pub const MARK: &'static str = "`";

    pub fn new(text: impl Into<Part>) -> Result<Fragment> {
        Fragment::wrap(FragmentKind::Styled(Style::InlineCode), text)
    }
}

/// A fenced code block:
///
/// ````text
/// ```rust
/// body
/// ```
/// ````
///
/// The body is rendered through the normal child path, so it is escaped like
/// any other message text.
pub struct InlineCodeBlock;

impl InlineCodeBlock {
    pub const FENCE: &'static str = "```";

    /// A code block without a language tag.
    pub fn new(text: impl Into<Part>) -> Result<Fragment> {
        Self::with_language(text, "")
    }

    pub fn with_language(text: impl Into<Part>, language: impl Into<Part>) -> Result<Fragment> {
        let language = language.into().into_text("language")?;
        Fragment::wrap(FragmentKind::CodeBlock { language }, text)
    }

    pub fn leading_mark(language: &str) -> String {
        format!("{}{language}\n", Self::FENCE)
    }

    pub fn trailing_mark() -> String {
        format!("\n{}", Self::FENCE)
    }

    pub(crate) fn render(language: &str, inner: &str) -> String {
        let mut out = Self::leading_mark(language);
        out.push_str(inner);
        out.push_str(&Self::trailing_mark());
        out
    }
}
