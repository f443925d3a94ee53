use std::convert::TryFrom;

use crate::{Compound, List, Tag, Value};

#[test]
fn list_rejects_mixed_kinds() {
    let e = List::try_from(vec![Value::Int(1), Value::Int(2), Value::Byte(3)]).unwrap_err();
    assert!(e.is_validation());

    let e = List::with_tag(Tag::Byte, vec![Value::Int(1)]).unwrap_err();
    assert!(e.is_validation());
}

#[test]
fn list_push_fixes_kind() {
    let mut list = List::new();
    assert_eq!(list.tag(), Tag::End);

    list.push(Value::Short(1)).unwrap();
    assert_eq!(list.tag(), Tag::Short);

    let e = list.push(Value::Int(2)).unwrap_err();
    assert!(e.is_validation());
    assert_eq!(list.len(), 1);
}

#[test]
fn empty_list_accepts_declared_kind() {
    let list = List::with_tag(Tag::Long, vec![]).unwrap();
    assert_eq!(list.tag(), Tag::Long);
    assert!(list.is_empty());
}

#[test]
fn compound_insert_overwrites() {
    let mut compound = Compound::new();
    compound.insert("k", Value::Int(1));
    compound.insert("other", Value::Byte(0));
    let previous = compound.insert("k", Value::String("now a string".into()));

    assert_eq!(previous, Some(Value::Int(1)));
    assert_eq!(compound.len(), 2);
    // Overwriting keeps the original position.
    assert_eq!(compound.keys().collect::<Vec<_>>(), ["k", "other"]);
}

#[test]
fn compound_set_preserves_kind() {
    let mut compound = Compound::new();
    compound.insert("count", Value::Int(1));

    compound.set("count", Value::Int(2)).unwrap();
    assert_eq!(compound.int("count"), Some(2));

    let e = compound
        .set("count", Value::String("nope".into()))
        .unwrap_err();
    assert!(e.is_validation());
    assert_eq!(compound.int("count"), Some(2));

    let e = compound.set("missing", Value::Int(3)).unwrap_err();
    assert!(e.is_validation());
}

#[test]
fn compound_typed_accessors() {
    let mut compound = Compound::new();
    compound.insert("b", Value::Byte(1));
    compound.insert("s", Value::String("text".into()));
    compound.insert("arr", Value::IntArray(vec![1, 2]));

    assert_eq!(compound.byte("b"), Some(1));
    assert_eq!(compound.string("s"), Some("text"));
    assert_eq!(compound.int_array("arr"), Some(&[1, 2][..]));

    // Wrong kind or missing key reads as None.
    assert_eq!(compound.int("b"), None);
    assert_eq!(compound.byte("missing"), None);
}

#[test]
fn value_accessors() {
    assert_eq!(Value::Byte(3).as_i64(), Some(3));
    assert_eq!(Value::Long(i64::MIN).as_i64(), Some(i64::MIN));
    assert_eq!(Value::Double(0.5).as_f64(), Some(0.5));
    assert_eq!(Value::String("x".into()).as_str(), Some("x"));
    assert_eq!(Value::String("x".into()).as_i64(), None);
}

#[test]
fn value_from_native() {
    assert_eq!(Value::from(true), Value::Byte(1));
    assert_eq!(Value::from(false), Value::Byte(0));
    assert_eq!(Value::from(-3i8), Value::Byte(-3));
    assert_eq!(Value::from(7i64), Value::Long(7));
    assert_eq!(Value::from("hi"), Value::String("hi".into()));
    assert_eq!(Value::from(vec![1i32, 2]), Value::IntArray(vec![1, 2]));
}

#[test]
fn serde_json_serialize() {
    let mut compound = Compound::new();
    compound.insert("a", Value::Byte(1));
    compound.insert("s", Value::String("x".into()));
    compound.insert(
        "l",
        Value::List(List::try_from(vec![Value::Int(1), Value::Int(2)]).unwrap()),
    );

    let json = serde_json::to_string(&Value::Compound(compound)).unwrap();
    assert_eq!(json, r#"{"a":1,"s":"x","l":[1,2]}"#);
}

#[test]
fn serde_json_deserialize() {
    let value: Value = serde_json::from_str(r#"{"n":-5,"pi":1.5,"s":"x"}"#).unwrap();
    let compound = value.as_compound().unwrap();
    assert_eq!(compound.long("n"), Some(-5));
    assert_eq!(compound.double("pi"), Some(1.5));
    assert_eq!(compound.string("s"), Some("x"));
}

#[test]
fn serde_json_mixed_seq_fails() {
    assert!(serde_json::from_str::<Value>(r#"[1,"a"]"#).is_err());
}
