//! # Constructor Arguments
//!
//! Every fragment constructor takes its arguments as a [`Part`]: raw text, an
//! integer, or an already built [`Fragment`]. Each constructor then
//! normalizes the part into the shape that parameter accepts:
//!
//! | parameter kind | accepts             | normalized to        |
//! |----------------|---------------------|----------------------|
//! | body           | text, fragment      | `Fragment`           |
//! | url, language  | text                | `String`             |
//! | identifier     | text, integer       | `String`             |
//!
//! Anything else is rejected with [`FragmentError::InvalidPartType`] before
//! any fragment is built or mutated.

use crate::error::{FragmentError, PartShape, Result};
use crate::fragment::Fragment;

/// A single argument to a fragment constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    Integer(i64),
    Fragment(Fragment),
}

impl Part {
    pub fn shape(&self) -> PartShape {
        match self {
            Part::Text(_) => PartShape::Text,
            Part::Integer(_) => PartShape::Integer,
            Part::Fragment(_) => PartShape::Fragment,
        }
    }

    /// Text becomes a plain text leaf; fragments pass through.
    pub(crate) fn into_fragment(self, parameter: &'static str) -> Result<Fragment> {
        match self {
            Part::Text(text) => Ok(Fragment::plain(text)),
            Part::Fragment(fragment) => Ok(fragment),
            other => Err(other.reject(parameter, "text or fragment")),
        }
    }

    pub(crate) fn into_text(self, parameter: &'static str) -> Result<String> {
        match self {
            Part::Text(text) => Ok(text),
            other => Err(other.reject(parameter, "text")),
        }
    }

    /// Identifiers (user ids, custom emoji ids) may be text or integers.
    pub(crate) fn into_identifier(self, parameter: &'static str) -> Result<String> {
        match self {
            Part::Text(text) => Ok(text),
            Part::Integer(id) => Ok(id.to_string()),
            other => Err(other.reject(parameter, "text or integer")),
        }
    }

    fn reject(&self, parameter: &'static str, expected: &'static str) -> FragmentError {
        let found = self.shape();
        log::debug!("Rejecting {found} for [{parameter}] parameter, expected {expected}");
        FragmentError::InvalidPartType {
            parameter,
            expected,
            found,
        }
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Part::Text(text.to_owned())
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Part::Text(text)
    }
}

impl From<&String> for Part {
    fn from(text: &String) -> Self {
        Part::Text(text.clone())
    }
}

impl From<char> for Part {
    fn from(c: char) -> Self {
        Part::Text(c.to_string())
    }
}

impl From<Fragment> for Part {
    fn from(fragment: Fragment) -> Self {
        Part::Fragment(fragment)
    }
}

macro_rules! integer_parts {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Part {
                fn from(id: $t) -> Self {
                    Part::Integer(i64::from(id))
                }
            }
        )*
    };
}

integer_parts!(i8, i16, i32, i64, u8, u16, u32);
