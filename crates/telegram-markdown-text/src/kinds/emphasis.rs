use crate::error::Result;
use crate::fragment::{Fragment, FragmentKind};
use crate::part::Part;

use super::Style;

/// `*text*`
pub struct Bold;

impl Bold {
    pub const MARK: &'static str = "*";

    pub fn new(text: impl Into<Part>) -> Result<Fragment> {
        Fragment::wrap(FragmentKind::Styled(Style::Bold), text)
    }
}

/// `~text~`
pub struct Strikethrough;

impl Strikethrough {
    pub const MARK: &'static str = "~";

    pub fn new(text: impl Into<Part>) -> Result<Fragment> {
        Fragment::wrap(FragmentKind::Styled(Style::Strikethrough), text)
    }
}

/// `||text||`
pub struct Spoiler;

impl Spoiler {
    pub const MARK: &'static str = "||";

    pub fn new(text: impl Into<Part>) -> Result<Fragment> {
        Fragment::wrap(FragmentKind::Styled(Style::Spoiler), text)
    }
}
