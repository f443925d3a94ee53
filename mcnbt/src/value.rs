use std::borrow::Borrow;
use std::convert::TryFrom;
use std::hash::Hash;
use std::ops::Deref;

use indexmap::IndexMap;
use serde::de::Visitor;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::Tag;

/// Value is a complete NBT value. It owns its data. Unlike a serde-style
/// mapping, it keeps the distinction between a List of Int and an IntArray,
/// so any tree re-encodes to the bytes it was decoded from.
///
/// ```
/// use mcnbt::{from_bytes, Value};
/// # use mcnbt::error::Result;
/// #
/// # fn main() -> Result<()> {
/// #   let buf = [10, 0, 0, 3, 0, 11, 68, 97, 116, 97, 86, 101, 114, 115, 105, 111, 110, 0, 0, 0, 0, 0];
///     let root = from_bytes(&buf)?;
///     if let Value::Compound(level) = &root {
///         match level.get("DataVersion") {
///             Some(Value::Int(ver)) => println!("Version: {}", ver),
///             _ => {}
///         }
///     }
/// #   Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Value {
    /// The tag kind of this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Byte(v) => Some(v as u64),
            Value::Short(v) => Some(v as u64),
            Value::Int(v) => Some(v as u64),
            Value::Long(v) => Some(v as u64),
            Value::Float(v) => Some(v as u64),
            Value::Double(v) => Some(v as u64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(Vec<i8>, ByteArray);
from!(Vec<i32>, IntArray);
from!(Vec<i64>, LongArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

/// A homogeneous sequence of tags.
///
/// Every element shares one kind, and that kind is remembered even when the
/// list is empty, so an empty list of Byte decoded from the wire re-encodes
/// to the same bytes. A list that never held an element has kind
/// [`Tag::End`], the wire encoding of "no particular kind".
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    tag: Tag,
    elements: Vec<Value>,
}

impl List {
    /// An empty list with no particular element kind.
    pub fn new() -> Self {
        List {
            tag: Tag::End,
            elements: Vec::new(),
        }
    }

    /// Build a list with a declared element kind. Fails with a validation
    /// error if any element is of a different kind. An empty list is valid
    /// for any declared kind.
    pub fn with_tag(tag: Tag, elements: Vec<Value>) -> Result<Self> {
        for element in &elements {
            if element.tag() != tag {
                return Err(Error::mismatched_list(tag, element.tag()));
            }
        }
        Ok(List { tag, elements })
    }

    /// The element kind. [`Tag::End`] for a list that never held an element.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Append an element. The first element fixes the list's kind; pushing a
    /// different kind afterwards is a validation error.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if self.tag == Tag::End {
            self.tag = value.tag();
        } else if value.tag() != self.tag {
            return Err(Error::mismatched_list(self.tag, value.tag()));
        }
        self.elements.push(value);
        Ok(())
    }
}

impl Default for List {
    fn default() -> Self {
        List::new()
    }
}

impl TryFrom<Vec<Value>> for List {
    type Error = Error;

    fn try_from(elements: Vec<Value>) -> Result<Self> {
        let tag = elements.first().map_or(Tag::End, Value::tag);
        List::with_tag(tag, elements)
    }
}

impl Deref for List {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// A mapping from string keys to tags.
///
/// Keys are unique; inserting an existing key overwrites its value. Iteration
/// order is insertion order, which is what makes encode-after-decode
/// reproduce its input byte for byte.
///
/// Members are read with [`get`][`Compound::get`] or the typed accessors
/// ([`byte`][`Compound::byte`], [`string`][`Compound::string`], ...), which
/// return the native payload. [`set`][`Compound::set`] updates a member while
/// keeping its kind; [`insert`][`Compound::insert`] is the unchecked path for
/// new members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: IndexMap<String, Value>,
}

impl Compound {
    pub fn new() -> Self {
        Compound {
            entries: IndexMap::new(),
        }
    }

    /// Insert a member, overwriting and returning any previous value under
    /// the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Update an existing member without changing its kind. Fails with a
    /// validation error if the key is absent or the new value is of a
    /// different kind than the current member.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        match self.entries.get_mut(key) {
            None => Err(Error::no_such_member(key)),
            Some(member) => {
                if member.tag() != value.tag() {
                    return Err(Error::member_kind(key, member.tag(), value.tag()));
                }
                *member = value;
                Ok(())
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&Value>
    where
        Q: ?Sized + Hash + Eq,
        String: Borrow<Q>,
    {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.entries.keys()
    }
}

macro_rules! accessor {
    ($name:ident, $variant:ident, ref $type:ty) => {
        impl Compound {
            /// The native payload of this member, if present and of the
            /// matching kind.
            pub fn $name(&self, key: &str) -> Option<$type> {
                match self.entries.get(key) {
                    Some(Value::$variant(v)) => Some(v),
                    _ => None,
                }
            }
        }
    };
    ($name:ident, $variant:ident, $type:ty) => {
        impl Compound {
            /// The native payload of this member, if present and of the
            /// matching kind.
            pub fn $name(&self, key: &str) -> Option<$type> {
                match self.entries.get(key) {
                    Some(Value::$variant(v)) => Some(*v),
                    _ => None,
                }
            }
        }
    };
}

accessor!(byte, Byte, i8);
accessor!(short, Short, i16);
accessor!(int, Int, i32);
accessor!(long, Long, i64);
accessor!(float, Float, f32);
accessor!(double, Double, f64);
accessor!(byte_array, ByteArray, ref &[i8]);
accessor!(string, String, ref &str);
accessor!(list, List, ref &List);
accessor!(compound, Compound, ref &Compound);
accessor!(int_array, IntArray, ref &[i32]);
accessor!(long_array, LongArray, ref &[i64]);

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Compound {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ------------- serde -------------

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Byte(v) => serializer.serialize_i8(*v),
            Value::Short(v) => serializer.serialize_i16(*v),
            Value::Int(v) => serializer.serialize_i32(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::ByteArray(v) => serializer.collect_seq(v),
            Value::String(v) => serializer.serialize_str(v),
            Value::List(v) => serializer.collect_seq(v.iter()),
            Value::Compound(v) => serializer.collect_map(v.iter()),
            Value::IntArray(v) => serializer.collect_seq(v),
            Value::LongArray(v) => serializer.collect_seq(v),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ValueVis;
        impl<'de> Visitor<'de> for ValueVis {
            type Value = Value;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "an NBT compatible value")
            }

            fn visit_bool<E>(self, v: bool) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_i8(v as i8)
            }

            fn visit_i8<E>(self, v: i8) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Byte(v))
            }

            fn visit_i16<E>(self, v: i16) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Short(v))
            }

            fn visit_i32<E>(self, v: i32) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Int(v))
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Long(v))
            }

            fn visit_u8<E>(self, v: u8) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Byte(v as i8))
            }

            fn visit_u16<E>(self, v: u16) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Short(v as i16))
            }

            fn visit_u32<E>(self, v: u32) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Int(v as i32))
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Long(v as i64))
            }

            fn visit_f32<E>(self, v: f32) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Float(v))
            }

            fn visit_f64<E>(self, v: f64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::Double(v))
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_string(v.into())
            }

            fn visit_string<E>(self, v: String) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Value::String(v))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut values = vec![];

                while let Some(el) = seq.next_element::<Value>()? {
                    values.push(el);
                }

                let list = List::try_from(values).map_err(serde::de::Error::custom)?;
                Ok(Value::List(list))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut obj = Compound::new();

                while let Some((k, v)) = map.next_entry::<String, Value>()? {
                    obj.insert(k, v);
                }

                Ok(Value::Compound(obj))
            }
        }

        deserializer.deserialize_any(ValueVis)
    }
}
