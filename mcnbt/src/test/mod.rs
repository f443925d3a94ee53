use std::convert::TryFrom;

use crate::{Compound, List, Tag, Value};


mod de;
mod value;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

/// A value exercising every tag kind, used by the round-trip tests.
pub fn kitchen_sink() -> Value {
    let mut inner = Compound::new();
    inner.insert("nested", Value::String("yes".into()));

    let mut compound = Compound::new();
    compound.insert("byte", Value::Byte(-1));
    compound.insert("short", Value::Short(-300));
    compound.insert("int", Value::Int(-100_000));
    compound.insert("long", Value::Long(i64::MIN));
    compound.insert("float", Value::Float(1.5));
    compound.insert("double", Value::Double(-0.25));
    compound.insert("bytes", Value::ByteArray(vec![-1, 0, 1]));
    compound.insert("string", Value::String("hello §6 world".into()));
    compound.insert(
        "list",
        Value::List(List::try_from(vec![Value::Int(1), Value::Int(2)]).unwrap()),
    );
    compound.insert("compound", Value::Compound(inner));
    compound.insert("ints", Value::IntArray(vec![i32::MIN, 0, i32::MAX]));
    compound.insert("longs", Value::LongArray(vec![i64::MIN, 0, i64::MAX]));
    Value::Compound(compound)
}
