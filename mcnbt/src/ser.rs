//! Encoding of a [`Value`] tree into the binary NBT format.
//!
//! The encoder mirrors the decoder byte for byte: any tree produced by
//! decoding re-encodes to its original input. The root tag's name is always
//! written as the empty string.

use std::convert::TryInto;
use std::io::Write;
use std::marker::PhantomData;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{Compound, Endian, List, Tag, Value};

/// Encode a value as big-endian (Java edition) NBT data.
pub fn to_bytes(value: &Value) -> Result<Vec<u8>> {
    Encoder::<BigEndian>::new().write_root(value)
}

/// Encode a value as little-endian (Bedrock edition) NBT data.
pub fn to_bytes_le(value: &Value) -> Result<Vec<u8>> {
    Encoder::<LittleEndian>::new().write_root(value)
}

/// Encode a value with a caller-supplied byte order.
pub fn to_bytes_endian(value: &Value, endian: Endian) -> Result<Vec<u8>> {
    match endian {
        Endian::Big => to_bytes(value),
        Endian::Little => to_bytes_le(value),
    }
}

/// Encode a value as Base64-wrapped big-endian NBT data, with padding.
pub fn to_base64(value: &Value) -> Result<String> {
    to_base64_endian(value, Endian::Big)
}

/// Encode a value as Base64-wrapped NBT data with a caller-supplied byte
/// order.
pub fn to_base64_endian(value: &Value, endian: Endian) -> Result<String> {
    Ok(STANDARD.encode(to_bytes_endian(value, endian)?))
}

struct Encoder<B> {
    buf: Vec<u8>,
    _byte_order: PhantomData<B>,
}

impl<B: ByteOrder> Encoder<B> {
    fn new() -> Self {
        Encoder {
            buf: Vec::new(),
            _byte_order: PhantomData,
        }
    }

    fn write_root(mut self, value: &Value) -> Result<Vec<u8>> {
        self.write_tag(value.tag())?;
        self.write_string("")?;
        self.write_value(value)?;
        Ok(self.buf)
    }

    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.buf.write_u8(tag.into())?;
        Ok(())
    }

    fn write_string(&mut self, s: &str) -> Result<()> {
        let encoded = cesu8::to_java_cesu8(s);
        if encoded.len() > u16::MAX as usize {
            return Err(Error::string_too_long(encoded.len()));
        }
        self.buf.write_u16::<B>(encoded.len() as u16)?;
        self.buf.write_all(&encoded)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = len.try_into().map_err(|_| Error::length_too_large(len))?;
        self.buf.write_i32::<B>(len)?;
        Ok(())
    }

    fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Byte(v) => self.buf.write_i8(*v)?,
            Value::Short(v) => self.buf.write_i16::<B>(*v)?,
            Value::Int(v) => self.buf.write_i32::<B>(*v)?,
            Value::Long(v) => self.buf.write_i64::<B>(*v)?,
            Value::Float(v) => self.buf.write_f32::<B>(*v)?,
            Value::Double(v) => self.buf.write_f64::<B>(*v)?,
            Value::ByteArray(v) => {
                self.write_len(v.len())?;
                for b in v {
                    self.buf.write_i8(*b)?;
                }
            }
            Value::String(v) => self.write_string(v)?,
            Value::List(v) => self.write_list(v)?,
            Value::Compound(v) => self.write_compound(v)?,
            Value::IntArray(v) => {
                self.write_len(v.len())?;
                for i in v {
                    self.buf.write_i32::<B>(*i)?;
                }
            }
            Value::LongArray(v) => {
                self.write_len(v.len())?;
                for i in v {
                    self.buf.write_i64::<B>(*i)?;
                }
            }
        }
        Ok(())
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        // An empty list that never held an element has kind End, the valid
        // wire encoding for "no particular kind".
        self.write_tag(list.tag())?;
        self.write_len(list.len())?;
        for element in list.iter() {
            self.write_value(element)?;
        }
        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        for (name, value) in compound.iter() {
            self.write_tag(value.tag())?;
            self.write_string(name)?;
            self.write_value(value)?;
        }
        self.write_tag(Tag::End)
    }
}
