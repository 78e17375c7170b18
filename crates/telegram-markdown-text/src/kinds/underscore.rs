//! Italic and underline share the `_` marker character.
//!
//! MarkdownV2 cannot tell `___x___` apart from nested italic/underline or a
//! literal run, so whenever a rendered body starts or ends with `_` a
//! [`Underscore::SENTINEL`] is placed between the body and the marker. The
//! Bot API treats `\r` as invisible, so the visible message is unchanged.
//! The sentinel is part of the wire contract: any other character would
//! show up in the delivered message.

use std::borrow::Cow;

use crate::error::Result;
use crate::fragment::{Fragment, FragmentKind};
use crate::part::Part;

use super::Style;

pub struct Underscore;

impl Underscore {
    pub const CHAR: char = '_';
    pub const SENTINEL: char = '\r';

    /// Insert the sentinel at whichever ends of `inner` touch an underscore.
    pub fn separate(inner: &str) -> Cow<'_, str> {
        let leading = inner.starts_with(Self::CHAR);
        let trailing = inner.ends_with(Self::CHAR);
        if !leading && !trailing {
            return Cow::Borrowed(inner);
        }

        log::trace!("Separating underscore run (leading: {leading}, trailing: {trailing})");
        let mut out = String::with_capacity(inner.len() + 2);
        if leading {
            out.push(Self::SENTINEL);
        }
        out.push_str(inner);
        if trailing {
            out.push(Self::SENTINEL);
        }
        Cow::Owned(out)
    }
}

/// `_text_`
pub struct Italic;

impl Italic {
    pub const MARK: &'static str = "_";

    pub fn new(text: impl Into<Part>) -> Result<Fragment> {
        Fragment::wrap(FragmentKind::Styled(Style::Italic), text)
    }
}

/// `__text__`
pub struct Underline;

impl Underline {
    pub const MARK: &'static str = "__";

    pub fn new(text: impl Into<Part>) -> Result<Fragment> {
        Fragment::wrap(FragmentKind::Styled(Style::Underline), text)
    }
}
