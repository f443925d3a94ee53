//! Decoding of the binary NBT format into a [`Value`] tree.
//!
//! Decoding is a single forward pass over a byte slice. The top level of a
//! stream is one (kind, name) metadata pair followed by the root payload; the
//! root's name is read and discarded. A root kind of End is rejected, there
//! must be a root tag.

use std::convert::TryFrom;
use std::marker::PhantomData;

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{Error, Result};
use crate::{Compound, Endian, List, Tag, Value};

/// Decode big-endian (Java edition) NBT data.
pub fn from_bytes(input: &[u8]) -> Result<Value> {
    Decoder::<BigEndian>::new(input).read_root()
}

/// Decode little-endian (Bedrock edition) NBT data.
pub fn from_bytes_le(input: &[u8]) -> Result<Value> {
    Decoder::<LittleEndian>::new(input).read_root()
}

/// Decode NBT data with a caller-supplied byte order.
pub fn from_bytes_endian(input: &[u8], endian: Endian) -> Result<Value> {
    match endian {
        Endian::Big => from_bytes(input),
        Endian::Little => from_bytes_le(input),
    }
}

/// Decode Base64-wrapped big-endian NBT data.
///
/// Trailing padding is stripped before decoding; an input whose stripped
/// length mod 4 equals 1 is impossible for valid Base64 and fails.
pub fn from_base64(input: &str) -> Result<Value> {
    from_base64_endian(input, Endian::Big)
}

/// Decode Base64-wrapped NBT data with a caller-supplied byte order.
pub fn from_base64_endian(input: &str, endian: Endian) -> Result<Value> {
    let stripped = input.trim_end_matches('=');
    let data = STANDARD_NO_PAD.decode(stripped).map_err(Error::base64)?;
    from_bytes_endian(&data, endian)
}

struct Decoder<'a, B> {
    data: &'a [u8],
    pos: usize,
    _byte_order: PhantomData<B>,
}

impl<'a, B: ByteOrder> Decoder<'a, B> {
    fn new(data: &'a [u8]) -> Self {
        Decoder {
            data,
            pos: 0,
            _byte_order: PhantomData,
        }
    }

    fn read_root(&mut self) -> Result<Value> {
        let tag = self.read_tag()?;
        if tag == Tag::End {
            return Err(Error::no_root_tag());
        }
        // The root's name carries no information for the tree.
        self.read_string()?;
        self.read_value(tag)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.data.len() - self.pos {
            return Err(Error::unexpected_eof(self.pos));
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.data[start..self.pos])
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    fn read_u16(&mut self) -> Result<u16> {
        Ok(B::read_u16(self.take(2)?))
    }

    fn read_i16(&mut self) -> Result<i16> {
        Ok(B::read_i16(self.take(2)?))
    }

    fn read_i32(&mut self) -> Result<i32> {
        Ok(B::read_i32(self.take(4)?))
    }

    fn read_i64(&mut self) -> Result<i64> {
        Ok(B::read_i64(self.take(8)?))
    }

    fn read_f32(&mut self) -> Result<f32> {
        Ok(B::read_f32(self.take(4)?))
    }

    fn read_f64(&mut self) -> Result<f64> {
        Ok(B::read_f64(self.take(8)?))
    }

    fn read_tag(&mut self) -> Result<Tag> {
        let pos = self.pos;
        let tag = self.read_u8()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag, pos))
    }

    // A negative length on the wire yields an empty sequence.
    fn read_len(&mut self) -> Result<usize> {
        let len = self.read_i32()?;
        Ok(usize::try_from(len).unwrap_or(0))
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let data = self.take(len)?;
        Ok(cesu8::from_java_cesu8(data)
            .map_err(|_| Error::nonunicode(data))?
            .into_owned())
    }

    fn read_value(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::End => return Err(Error::invalid_tag(Tag::End.into(), self.pos)),
            Tag::Byte => Value::Byte(self.read_i8()?),
            Tag::Short => Value::Short(self.read_i16()?),
            Tag::Int => Value::Int(self.read_i32()?),
            Tag::Long => Value::Long(self.read_i64()?),
            Tag::Float => Value::Float(self.read_f32()?),
            Tag::Double => Value::Double(self.read_f64()?),
            Tag::ByteArray => {
                let len = self.read_len()?;
                let data = self.take(len)?;
                Value::ByteArray(data.iter().map(|&b| b as i8).collect())
            }
            Tag::String => Value::String(self.read_string()?),
            Tag::List => self.read_list()?,
            Tag::Compound => Value::Compound(self.read_compound()?),
            Tag::IntArray => {
                let len = self.read_len()?;
                let mut elements = Vec::new();
                for _ in 0..len {
                    elements.push(self.read_i32()?);
                }
                Value::IntArray(elements)
            }
            Tag::LongArray => {
                let len = self.read_len()?;
                let mut elements = Vec::new();
                for _ in 0..len {
                    elements.push(self.read_i64()?);
                }
                Value::LongArray(elements)
            }
        })
    }

    fn read_list(&mut self) -> Result<Value> {
        let element_tag = self.read_tag()?;
        let len = self.read_len()?;
        let mut elements = Vec::new();
        if element_tag != Tag::End {
            for _ in 0..len {
                elements.push(self.read_value(element_tag)?);
            }
        }
        // The declared element kind is kept even when the list is empty, so
        // re-encoding reproduces the input bytes.
        Ok(Value::List(List::with_tag(element_tag, elements)?))
    }

    fn read_compound(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();
        loop {
            let tag = self.read_tag()?;
            if tag == Tag::End {
                break;
            }
            let name = self.read_string()?;
            let value = self.read_value(tag)?;
            compound.insert(name, value);
        }
        Ok(compound)
    }
}
