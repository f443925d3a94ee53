//! mcnbt is a codec for *Minecraft*'s NBT format, built around an owned tag
//! tree rather than serde-derived structs.
//!
//! * For the tag tree itself see [`Value`], [`List`] and [`Compound`].
//! * For the binary format see [`from_bytes`] and [`to_bytes`], plus the
//!   `_le`/`_endian` variants for Bedrock-edition little-endian data.
//! * For string-safe transport see [`from_base64`] and [`to_base64`].
//! * The textual Mojangson/SNBT notation lives in the sibling `mcsnbt` crate.
//!
//! # Quick example
//!
//! Decoding a compound and reading a member without manually unwrapping tags:
//!
//! ```
//! use mcnbt::{from_bytes, to_bytes, Value};
//! # use mcnbt::error::Result;
//! #
//! # fn main() -> Result<()> {
//! let buf = [10, 0, 0, 1, 0, 3, 102, 111, 111, 1, 0];
//! let root = from_bytes(&buf)?;
//!
//! let compound = root.as_compound().unwrap();
//! assert_eq!(compound.byte("foo"), Some(1));
//!
//! // Re-encoding reproduces the input bytes.
//! assert_eq!(to_bytes(&root)?, &buf);
//! # Ok(())
//! # }
//! ```
//!
//! Strings are encoded as modified UTF-8 ("Java CESU-8"): code points above
//! the basic multilingual plane become two 3-byte surrogate sequences on the
//! wire, never a 4-byte sequence.

pub mod error;

mod de;
mod ser;
mod value;

pub use de::*;
pub use ser::*;
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// An NBT tag kind. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents an array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other tags, all of the same kind.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents an array of Int (i32).
    IntArray = 11,
    /// Represents an array of Long (i64).
    LongArray = 12,
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually, the tags will very rarely change
// so isn't a massive burden, but saves a significant amount of compile time.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
        }
    }
}

/// Byte order of the binary format. Java edition uses [`Endian::Big`],
/// Bedrock edition uses [`Endian::Little`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Endian {
    Big,
    Little,
}
