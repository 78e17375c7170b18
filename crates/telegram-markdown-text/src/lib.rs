//! # telegram-markdown-text
//!
//! Build Telegram `MarkdownV2` messages out of nested fragments without
//! tracking escaping rules by hand.
//!
//! ## Model
//!
//! A message is a tree of [`Fragment`]s. Leaves hold raw text; every other
//! node owns its children and adds markers around (or post-processing on
//! top of) their rendering:
//!
//! ```text
//! Fragment ─┬─ PlainText("Hello, ")           → Hello,
//!           ├─ Bold ── PlainText("world")     → *world*
//!           └─ PlainText("!")                 → \!
//! ```
//!
//! Rendering is a single bottom-up fold producing one `String`; that string
//! is what goes into `sendMessage` with `parse_mode = "MarkdownV2"`.
//!
//! ## Modules
//!
//! - **`fragment`**: the [`Fragment`] node, composition and rendering
//! - **`kinds`**: one type per node kind, owning its markers
//! - **`part`**: [`Part`], the `text | integer | fragment` constructor argument
//! - **`escape`**: the two escaping tables
//! - **`error`**: [`FragmentError`]
//!
//! ## Quick Start
//!
//! ```
//! use telegram_markdown_text::{Bold, Fragment, InlineUser, Italic};
//!
//! let mut message = Fragment::new(["Hello, "])?;
//! message
//!     .append(Bold::new("world")?)?
//!     .append("!")?
//!     .append_newline()
//!     .append(Italic::new(InlineUser::new("ping", 12345)?)?)?;
//!
//! assert_eq!(
//!     message.render(),
//!     "Hello, *world*\\!\n_[ping](tg://user?id=12345)_"
//! );
//! # Ok::<(), telegram_markdown_text::FragmentError>(())
//! ```
//!
//! ## Wire Contract
//!
//! The exact output, including escape backslashes, marker placement, the
//! `\r` underscore separator and the quote block terminator, is the
//! compatibility contract with the Bot API's parser.

// Kind types are constructors for `Fragment`, not for themselves.
#![allow(clippy::new_ret_no_self)]

pub mod error;
pub mod escape;
pub mod fragment;
pub mod kinds;
pub mod part;

pub use error::{FragmentError, PartShape, Result};
pub use escape::{escape_markdown, escape_url};
pub use fragment::{Fragment, FragmentKind};
pub use kinds::{
    Bold, Emoji, InlineCode, InlineCodeBlock, InlineUrl, InlineUser, Italic, LinkKind, LinkTarget,
    PlainText, QuoteBlock, Spoiler, Strikethrough, Style, Underline,
};
pub use part::Part;
