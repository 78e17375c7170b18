use std::borrow::Cow;

use super::{Bold, InlineCode, Italic, Spoiler, Strikethrough, Underline, Underscore};

/// Inline styles that wrap their body in a leading/trailing marker pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    InlineCode,
}

impl Style {
    pub fn leading_mark(self) -> &'static str {
        match self {
            Style::Bold => Bold::MARK,
            Style::Italic => Italic::MARK,
            Style::Underline => Underline::MARK,
            Style::Strikethrough => Strikethrough::MARK,
            Style::Spoiler => Spoiler::MARK,
            Style::InlineCode => InlineCode::MARK,
        }
    }

    /// Every inline style is symmetric.
    pub fn trailing_mark(self) -> &'static str {
        self.leading_mark()
    }

    /// Italic and underline markers are built from `_`, so a body touching
    /// the marker could merge into a longer underscore run.
    pub fn uses_underscores(self) -> bool {
        matches!(self, Style::Italic | Style::Underline)
    }

    pub(crate) fn render(self, inner: &str) -> String {
        let inner = if self.uses_underscores() {
            Underscore::separate(inner)
        } else {
            Cow::Borrowed(inner)
        };

        let leading = self.leading_mark();
        let trailing = self.trailing_mark();
        let mut out = String::with_capacity(leading.len() + inner.len() + trailing.len());
        out.push_str(leading);
        out.push_str(&inner);
        out.push_str(trailing);
        out
    }
}
