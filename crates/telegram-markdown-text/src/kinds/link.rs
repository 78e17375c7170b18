use crate::error::Result;
use crate::escape::escape_url;
use crate::fragment::{Fragment, FragmentKind};
use crate::part::Part;

/// How a link target was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Caller supplied URL.
    Url,
    /// `tg://user?id=...` mention.
    User,
    /// `tg://emoji?id=...` custom emoji, rendered with a leading `!`.
    CustomEmoji,
}

/// The `(target)` half of a link fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    kind: LinkKind,
    url: String,
}

impl LinkTarget {
    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    /// The unescaped target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn render(&self, inner: &str) -> String {
        let prefix = match self.kind {
            LinkKind::CustomEmoji => Emoji::PREFIX,
            LinkKind::Url | LinkKind::User => "",
        };
        format!(
            "{prefix}{}{inner}{}{}{}",
            InlineUrl::OPEN,
            InlineUrl::SEPARATOR,
            escape_url(&self.url),
            InlineUrl::CLOSE
        )
    }
}

/// `[text](url)`
pub struct InlineUrl;

impl InlineUrl {
    pub const OPEN: &'static str = "[";
    pub const SEPARATOR: &'static str = "](";
    pub const CLOSE: &'static str = ")";

    pub fn new(text: impl Into<Part>, url: impl Into<Part>) -> Result<Fragment> {
        let url = url.into().into_text("url")?;
        Self::build(LinkKind::Url, text, url)
    }

    fn build(kind: LinkKind, text: impl Into<Part>, url: String) -> Result<Fragment> {
        Fragment::wrap(FragmentKind::Link(LinkTarget { kind, url }), text)
    }
}

/// A mention of a user by id, `[text](tg://user?id=<id>)`.
pub struct InlineUser;

impl InlineUser {
    pub const URI_PREFIX: &'static str = "tg://user?id=";

    pub fn new(text: impl Into<Part>, user_id: impl Into<Part>) -> Result<Fragment> {
        let user_id = user_id.into().into_identifier("user_id")?;
        InlineUrl::build(LinkKind::User, text, format!("{}{user_id}", Self::URI_PREFIX))
    }
}

/// A custom emoji, `![fallback](tg://emoji?id=<id>)`.
///
/// `emoji` is the fallback emoji shown by clients that cannot display the
/// custom one.
pub struct Emoji;

impl Emoji {
    pub const PREFIX: &'static str = "!";
    pub const URI_PREFIX: &'static str = "tg://emoji?id=";

    pub fn new(emoji: impl Into<Part>, custom_emoji_id: impl Into<Part>) -> Result<Fragment> {
        let id = custom_emoji_id.into().into_identifier("custom_emoji_id")?;
        InlineUrl::build(
            LinkKind::CustomEmoji,
            emoji,
            format!("{}{id}", Self::URI_PREFIX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FragmentError, PartShape};
    use crate::kinds::Bold;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn url_link() {
        let link = InlineUrl::new("text", "https://example.com").unwrap();
        assert_eq!(link.render(), "[text](https://example.com)");
    }

    #[test]
    fn url_only_escapes_backslash_and_close_paren() {
        let link = InlineUrl::new("text", "http://a.com/(b)").unwrap();
        assert_eq!(link.render(), "[text](http://a.com/(b\\))");
    }

    #[test]
    fn link_text_is_markdown_escaped() {
        let link = InlineUrl::new("v1.0 [beta]", "https://x.io/a_b").unwrap();
        assert_eq!(link.render(), r"[v1\.0 \[beta\]](https://x.io/a_b)");
    }

    #[test]
    fn link_text_can_be_styled() {
        let link = InlineUrl::new(Bold::new("go").unwrap(), "https://x.io").unwrap();
        assert_eq!(link.render(), "[*go*](https://x.io)");
    }

    #[test]
    fn url_must_be_text() {
        let err = InlineUrl::new("text", 5).unwrap_err();
        assert_eq!(
            err,
            FragmentError::InvalidPartType {
                parameter: "url",
                expected: "text",
                found: PartShape::Integer,
            }
        );
    }

    #[rstest]
    #[case(InlineUser::new("name", 12345).unwrap())]
    #[case(InlineUser::new("name", "12345").unwrap())]
    fn user_mention(#[case] mention: Fragment) {
        assert_eq!(mention.render(), "[name](tg://user?id=12345)");
    }

    #[test]
    fn user_mention_target() {
        let mention = InlineUser::new("name", 7).unwrap();
        let FragmentKind::Link(target) = mention.kind() else {
            panic!("expected a link, got {:?}", mention.kind());
        };
        assert_eq!(target.kind(), LinkKind::User);
        assert_eq!(target.url(), "tg://user?id=7");
    }

    #[test]
    fn user_id_rejects_fragment() {
        let err = InlineUser::new("name", Bold::new("x").unwrap()).unwrap_err();
        assert!(matches!(
            err,
            FragmentError::InvalidPartType {
                parameter: "user_id",
                found: PartShape::Fragment,
                ..
            }
        ));
    }

    #[test]
    fn custom_emoji() {
        let emoji = Emoji::new("👍", 5368324170671202286i64).unwrap();
        assert_eq!(
            emoji.render(),
            "![👍](tg://emoji?id=5368324170671202286)"
        );
    }

    #[test]
    fn custom_emoji_id_rejects_fragment() {
        assert!(Emoji::new("👍", Bold::new("x").unwrap()).is_err());
    }

    #[test]
    fn mention_body_rejects_integer() {
        assert!(InlineUser::new(1, 1).is_err());
    }
}
