//! Contains the Error and Result type used by the tag model and the binary
//! codec.

use crate::Tag;

/// Various errors that can occur while building tag trees or converting them
/// to and from the binary format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A value was incompatible with its declared tag kind, e.g. an element
    /// of the wrong kind pushed into a list, or a compound member update that
    /// would change the member's kind.
    Validation,

    /// Data could not be represented in, or parsed from, the binary format:
    /// unknown tag bytes, truncated input, strings beyond the 16-bit length
    /// ceiling, invalid modified UTF-8, malformed Base64.
    Format,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::format(format!("io error: {}", e))
    }
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn is_format(&self) -> bool {
        self.kind == ErrorKind::Format
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Error {
        Error {
            msg: msg.into(),
            kind: ErrorKind::Validation,
        }
    }

    pub(crate) fn format(msg: impl Into<String>) -> Error {
        Error {
            msg: msg.into(),
            kind: ErrorKind::Format,
        }
    }

    pub(crate) fn mismatched_list(expected: Tag, found: Tag) -> Error {
        Error::validation(format!(
            "cannot insert {:?} into list of {:?}",
            found, expected
        ))
    }

    pub(crate) fn no_such_member(key: &str) -> Error {
        Error::validation(format!("compound has no member '{}'", key))
    }

    pub(crate) fn member_kind(key: &str, expected: Tag, found: Tag) -> Error {
        Error::validation(format!(
            "cannot set member '{}' of kind {:?} to a {:?} value",
            key, expected, found
        ))
    }

    pub(crate) fn invalid_tag(tag: u8, pos: usize) -> Error {
        Error::format(format!("invalid nbt tag value {} at offset {}", tag, pos))
    }

    pub(crate) fn no_root_tag() -> Error {
        Error::format("invalid nbt: root tag is End".to_owned())
    }

    pub(crate) fn unexpected_eof(pos: usize) -> Error {
        Error::format(format!(
            "eof: unexpectedly ran out of input at offset {}",
            pos
        ))
    }

    pub(crate) fn nonunicode(data: &[u8]) -> Error {
        Error::format(format!(
            "invalid nbt string: nonunicode: {}",
            String::from_utf8_lossy(data)
        ))
    }

    pub(crate) fn string_too_long(len: usize) -> Error {
        Error::format(format!(
            "encoded string too long: {} bytes (max: 65535)",
            len
        ))
    }

    pub(crate) fn length_too_large(len: usize) -> Error {
        Error::format(format!("sequence length {} exceeds i32 range", len))
    }

    pub(crate) fn base64(e: impl std::fmt::Display) -> Error {
        Error::format(format!("invalid base64: {}", e))
    }
}
