use std::fmt;

/// The shape of a value handed to a fragment constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartShape {
    Text,
    Integer,
    Fragment,
}

impl fmt::Display for PartShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PartShape::Text => "text",
            PartShape::Integer => "integer",
            PartShape::Fragment => "fragment",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FragmentError {
    #[error(
        "This data type is not supported for [{parameter}] parameter: expected {expected}, found {found}"
    )]
    InvalidPartType {
        /// Name of the rejected constructor parameter.
        parameter: &'static str,
        /// Human readable list of accepted shapes.
        expected: &'static str,
        found: PartShape,
    },
}

pub type Result<T, E = FragmentError> = std::result::Result<T, E>;
