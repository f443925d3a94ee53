use std::convert::TryFrom;

use mcnbt::{Compound, List, Value};

mod ser;

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
    compound.insert("string", Value::String("say \"hi\" \\ done".into()));
    compound.insert(
        "list",
        Value::List(List::try_from(vec![Value::Int(1), Value::Int(2)]).unwrap()),
    );
    compound.insert("compound", Value::Compound(inner));
    compound.insert("ints", Value::IntArray(vec![i32::MIN, 0, i32::MAX]));
    compound.insert("longs", Value::LongArray(vec![i64::MIN, 0, i64::MAX]));
    Value::Compound(compound)
}
