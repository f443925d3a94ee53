//! Contains the Error and Result type used by the parser.

use mcnbt::Tag;

/// A Mojangson syntax error. Every error carries the byte offset into the
/// input at which the parser gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    pos: usize,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at position {}", self.msg, self.pos)
    }
}

impl Error {
    /// Byte offset into the input at which the error occurred.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn at(msg: impl Into<String>, pos: usize) -> Error {
        Error {
            msg: msg.into(),
            pos,
        }
    }

    pub(crate) fn expected_value(pos: usize) -> Error {
        Error::at("expected value", pos)
    }

    pub(crate) fn expected_key(pos: usize) -> Error {
        Error::at("expected key", pos)
    }

    pub(crate) fn expected_char(expected: char, pos: usize) -> Error {
        Error::at(format!("expected '{}'", expected), pos)
    }

    pub(crate) fn unclosed_quoted_string(pos: usize) -> Error {
        Error::at("unclosed quoted string", pos)
    }

    pub(crate) fn invalid_escape(c: char, pos: usize) -> Error {
        Error::at(
            format!("invalid escape sequence '{}' in quoted string", c),
            pos,
        )
    }

    pub(crate) fn trailing_data(pos: usize) -> Error {
        Error::at("unexpected trailing data", pos)
    }

    pub(crate) fn mismatched_list(expected: Tag, found: Tag, pos: usize) -> Error {
        Error::at(
            format!("cannot insert {:?} into list of {:?}", found, expected),
            pos,
        )
    }

    pub(crate) fn mismatched_array(array: Tag, found: Tag, pos: usize) -> Error {
        Error::at(format!("cannot insert {:?} into {:?}", found, array), pos)
    }

    pub(crate) fn invalid_array_type(c: Option<char>, pos: usize) -> Error {
        match c {
            Some(c) => Error::at(format!("invalid array type '{}'", c), pos),
            None => Error::at("invalid array type", pos),
        }
    }
}
