//! # Fragment Kinds
//!
//! One type per node kind. Each kind owns its syntax: marker constants, URI
//! schemes and sentinels live next to the constructor that uses them, never
//! in the renderer.
//!
//! ## Types
//!
//! - **`PlainText`**: escaped leaf text
//! - **`Bold`** `*`, **`Strikethrough`** `~`, **`Spoiler`** `||`
//! - **`Italic`** `_`, **`Underline`** `__`: underscore markers, see [`Underscore`]
//! - **`InlineCode`** `` ` ``, **`InlineCodeBlock`** `` ``` ``
//! - **`InlineUrl`**, **`InlineUser`**, **`Emoji`**: `[text](target)`
//! - **`QuoteBlock`**: `>` line prefixes
//!
//! The composite base is [`Fragment::new`](crate::Fragment::new).

pub mod code;
pub mod emphasis;
pub mod link;
pub mod plain_text;
pub mod quote_block;
pub mod style;
pub mod underscore;

pub use code::{InlineCode, InlineCodeBlock};
pub use emphasis::{Bold, Spoiler, Strikethrough};
pub use link::{Emoji, InlineUrl, InlineUser, LinkKind, LinkTarget};
pub use plain_text::PlainText;
pub use quote_block::QuoteBlock;
pub use style::Style;
pub use underscore::{Italic, Underline, Underscore};
