use std::fmt;
use std::ops::Add;

use crate::error::Result;
use crate::escape::escape_markdown;
use crate::kinds::{InlineCodeBlock, LinkTarget, QuoteBlock, Style};
use crate::part::Part;

/// What a fragment contributes on top of its children's rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentKind {
    /// Plain concatenation of the children.
    Composite,
    /// Leaf holding raw, unescaped text.
    PlainText(String),
    /// One child wrapped in a marker pair (`*`, `_`, `__`, `~`, `||`, `` ` ``).
    Styled(Style),
    /// `[child](target)`, optionally prefixed with `!` for custom emoji.
    Link(LinkTarget),
    /// Fenced code block with an optional language tag.
    CodeBlock { language: String },
    /// Every non-empty rendered line prefixed with `>`.
    QuoteBlock,
}

/// A node in the message tree.
///
/// Every fragment exclusively owns its children, so a tree can never
/// contain a cycle. The only mutation after construction is
/// [`append`](Fragment::append) / [`append_newline`](Fragment::append_newline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    kind: FragmentKind,
    children: Vec<Fragment>,
}

impl Fragment {
    /// Build a composite from an ordered list of parts.
    ///
    /// Text parts become plain text leaves. Fails with
    /// [`InvalidPartType`](crate::FragmentError::InvalidPartType) if any part
    /// is neither text nor a fragment.
    pub fn new<I>(parts: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Part>,
    {
        Self::collect(FragmentKind::Composite, parts)
    }

    /// A plain text leaf. Infallible, since the argument is already text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: FragmentKind::PlainText(text.into()),
            children: Vec::new(),
        }
    }

    pub(crate) fn collect<I>(kind: FragmentKind, parts: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Part>,
    {
        let children = parts
            .into_iter()
            .map(|part| part.into().into_fragment("parts"))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { kind, children })
    }

    /// Wrap a single body argument (`text` parameter of styled kinds).
    pub(crate) fn wrap(kind: FragmentKind, text: impl Into<Part>) -> Result<Self> {
        let child = text.into().into_fragment("text")?;
        Ok(Self {
            kind,
            children: vec![child],
        })
    }

    fn composite(children: Vec<Fragment>) -> Self {
        Self {
            kind: FragmentKind::Composite,
            children,
        }
    }

    pub fn kind(&self) -> &FragmentKind {
        &self.kind
    }

    pub fn children(&self) -> &[Fragment] {
        &self.children
    }

    /// True for a fragment with no children and no text of its own.
    pub fn is_empty(&self) -> bool {
        match &self.kind {
            FragmentKind::PlainText(text) => text.is_empty(),
            _ => self.children.is_empty(),
        }
    }

    /// A new composite `[self, other]`. `self` is left untouched.
    pub fn combine(&self, other: impl Into<Part>) -> Result<Fragment> {
        let other = other.into().into_fragment("other")?;
        Ok(Self::composite(vec![self.clone(), other]))
    }

    /// Add `element` as the last child and return `self` for chaining.
    ///
    /// The element is validated before anything is changed, so a failed
    /// append leaves the fragment as it was. Appending to a plain text leaf
    /// turns it into a composite `[leaf, element]`.
    pub fn append(&mut self, element: impl Into<Part>) -> Result<&mut Self> {
        let element = element.into().into_fragment("element")?;
        self.push(element);
        Ok(self)
    }

    pub fn append_newline(&mut self) -> &mut Self {
        self.push(Fragment::plain("\n"));
        self
    }

    fn push(&mut self, child: Fragment) {
        if matches!(self.kind, FragmentKind::PlainText(_)) {
            let leaf = std::mem::replace(self, Self::composite(Vec::with_capacity(2)));
            self.children.push(leaf);
        }
        self.children.push(child);
    }

    /// Render the tree into a MarkdownV2 string.
    ///
    /// Pure: rendering the same tree twice yields the same string.
    pub fn render(&self) -> String {
        match &self.kind {
            FragmentKind::Composite => self.render_children(),
            FragmentKind::PlainText(text) => escape_markdown(text),
            FragmentKind::Styled(style) => style.render(&self.render_children()),
            FragmentKind::Link(target) => target.render(&self.render_children()),
            FragmentKind::CodeBlock { language } => {
                InlineCodeBlock::render(language, &self.render_children())
            }
            FragmentKind::QuoteBlock => QuoteBlock::render(&self.render_children()),
        }
    }

    fn render_children(&self) -> String {
        self.children.iter().map(Fragment::render).collect()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::plain(text)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::plain(text)
    }
}

impl<T> Add<T> for Fragment
where
    T: Into<Fragment>,
{
    type Output = Fragment;

    fn add(self, rhs: T) -> Fragment {
        Fragment::composite(vec![self, rhs.into()])
    }
}

impl Extend<Fragment> for Fragment {
    fn extend<I: IntoIterator<Item = Fragment>>(&mut self, iter: I) {
        for child in iter {
            self.push(child);
        }
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Fragment::composite(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FragmentError, PartShape};
    use crate::kinds::{Bold, Italic};
    use pretty_assertions::assert_eq;

    #[test]
    fn composite_concatenates_children_in_order() {
        let fragment = Fragment::new(["a", "b", "c"]).unwrap();
        assert_eq!(fragment.children().len(), 3);
        assert_eq!(fragment.render(), "abc");
    }

    #[test]
    fn composite_mixes_text_and_fragments() {
        let fragment = Fragment::new([
            Part::from("Hello, "),
            Part::from(Bold::new("world").unwrap()),
            Part::from("!"),
        ])
        .unwrap();
        assert_eq!(fragment.render(), "Hello, *world*\\!");
    }

    #[test]
    fn new_rejects_integer_part() {
        let err = Fragment::new([Part::from("a"), Part::from(5)]).unwrap_err();
        assert_eq!(
            err,
            FragmentError::InvalidPartType {
                parameter: "parts",
                expected: "text or fragment",
                found: PartShape::Integer,
            }
        );
    }

    #[test]
    fn empty_composite_renders_nothing() {
        let fragment = Fragment::new(Vec::<Part>::new()).unwrap();
        assert!(fragment.is_empty());
        assert_eq!(fragment.render(), "");
    }

    #[test]
    fn combine_leaves_self_untouched() {
        let left = Fragment::plain("a");
        let combined = left.combine("b").unwrap();

        assert_eq!(left.render(), "a");
        assert_eq!(combined.children(), &[Fragment::plain("a"), Fragment::plain("b")]);
        assert_eq!(combined.render(), "ab");
    }

    #[test]
    fn combine_rejects_integer() {
        let err = Fragment::plain("a").combine(1).unwrap_err();
        assert!(matches!(
            err,
            FragmentError::InvalidPartType {
                parameter: "other",
                ..
            }
        ));
    }

    #[test]
    fn add_operator_builds_composite() {
        let fragment = Bold::new("x").unwrap() + " and " + Italic::new("y").unwrap();
        assert_eq!(fragment.render(), "*x* and _y_");
    }

    #[test]
    fn append_chains() {
        let mut fragment = Fragment::new(["a"]).unwrap();
        fragment
            .append("b")
            .unwrap()
            .append_newline()
            .append(Bold::new("c").unwrap())
            .unwrap();
        assert_eq!(fragment.render(), "ab\n*c*");
    }

    #[test]
    fn failed_append_does_not_mutate() {
        let mut fragment = Fragment::new(["a"]).unwrap();
        let before = fragment.clone();

        let err = fragment.append(3).unwrap_err();

        assert!(matches!(
            err,
            FragmentError::InvalidPartType {
                parameter: "element",
                found: PartShape::Integer,
                ..
            }
        ));
        assert_eq!(fragment, before);
    }

    #[test]
    fn append_to_styled_lands_inside_markers() {
        let mut bold = Bold::new("a").unwrap();
        bold.append("b").unwrap();
        assert_eq!(bold.render(), "*ab*");
    }

    #[test]
    fn append_to_plain_leaf_promotes_to_composite() {
        let mut leaf = Fragment::plain("a.");
        leaf.append("b.").unwrap();

        assert_eq!(leaf.kind(), &FragmentKind::Composite);
        assert_eq!(leaf.children(), &[Fragment::plain("a."), Fragment::plain("b.")]);
        assert_eq!(leaf.render(), "a\\.b\\.");
    }

    #[test]
    fn display_matches_render() {
        let fragment = Bold::new("a.b").unwrap();
        assert_eq!(fragment.to_string(), fragment.render());
        assert_eq!(format!("{fragment}"), "*a\\.b*");
    }

    #[test]
    fn render_is_idempotent() {
        let mut fragment = Italic::new(Bold::new("x_y").unwrap()).unwrap();
        fragment.append_newline();
        assert_eq!(fragment.render(), fragment.render());
    }

    #[test]
    fn collect_and_extend() {
        let mut fragment: Fragment = ["a", "b"].into_iter().map(Fragment::from).collect();
        fragment.extend([Fragment::plain("c")]);
        assert_eq!(fragment.render(), "abc");
    }

    #[test]
    fn is_empty_for_leaves() {
        assert!(Fragment::plain("").is_empty());
        assert!(!Fragment::plain("x").is_empty());
    }

    #[test]
    fn fragments_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Fragment>();
    }
}
