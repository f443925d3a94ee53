use std::convert::TryFrom;

use mcnbt::{Compound, List, Value};

use super::kitchen_sink;
use crate::{from_str, to_string, to_string_colored};

#[test]
fn literal_compound() {
    let compound: Compound = [
        ("foo", Value::Byte(1)),
        ("bar", Value::String("\"HelloWorld\"".into())),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        to_string(&Value::Compound(compound)),
        r#"{"foo":1b,"bar":"\"HelloWorld\""}"#
    );
}

#[test]
fn scalar_tokens() {
    assert_eq!(to_string(&Value::Byte(1)), "1b");
    assert_eq!(to_string(&Value::Byte(-1)), "-1b");
    assert_eq!(to_string(&Value::Short(2)), "2s");
    assert_eq!(to_string(&Value::Int(3)), "3");
    assert_eq!(to_string(&Value::Long(4)), "4L");
    assert_eq!(to_string(&Value::Float(1.5)), "1.5f");
    assert_eq!(to_string(&Value::Float(2.0)), "2.0f");
    assert_eq!(to_string(&Value::Double(-0.25)), "-0.25d");
    assert_eq!(to_string(&Value::Double(3.0)), "3.0d");
}

#[test]
fn array_tokens() {
    assert_eq!(
        to_string(&Value::ByteArray(vec![1, 2, 3])),
        "[B;1B,2B,3B]"
    );
    assert_eq!(to_string(&Value::IntArray(vec![1, -2, 3])), "[I;1,-2,3]");
    assert_eq!(to_string(&Value::LongArray(vec![1, 2])), "[L;1L,2L]");
    assert_eq!(to_string(&Value::ByteArray(vec![])), "[B;]");
}

#[test]
fn string_escaping() {
    assert_eq!(
        to_string(&Value::String("say \"hi\" \\ done".into())),
        r#""say \"hi\" \\ done""#
    );

    let compound: Compound = [(r#"a"key"#, Value::Byte(1))].into_iter().collect();
    assert_eq!(
        to_string(&Value::Compound(compound)),
        r#"{"a\"key":1b}"#
    );
}

#[test]
fn lists_and_nesting() {
    let list = List::try_from(vec![Value::Byte(1), Value::Byte(2)]).unwrap();
    assert_eq!(to_string(&Value::List(list)), "[1b,2b]");

    let inner = List::try_from(vec![Value::Int(1), Value::Int(2)]).unwrap();
    let outer = List::try_from(vec![Value::List(inner)]).unwrap();
    assert_eq!(to_string(&Value::List(outer)), "[[1,2]]");

    assert_eq!(to_string(&Value::List(List::new())), "[]");
    assert_eq!(to_string(&Value::Compound(Compound::new())), "{}");
}

#[test]
fn colored_output() {
    let compound: Compound = [("foo", Value::Byte(1))].into_iter().collect();
    assert_eq!(
        to_string_colored(&Value::Compound(compound)),
        "{\"§bfoo§r\": §61§cb§r}"
    );

    assert_eq!(to_string_colored(&Value::Int(3)), "§63§r");
    assert_eq!(to_string_colored(&Value::String("x".into())), "\"§ax§r\"");
    assert_eq!(
        to_string_colored(&Value::ByteArray(vec![1, 2])),
        "[§cB§r;§61§cB§r, §62§cB§r]"
    );
}

#[test]
fn round_trip() {
    let value = kitchen_sink();
    let printed = to_string(&value);
    assert_eq!(from_str(&printed).unwrap(), value);

    // Colorized printing does not participate in round-tripping.
    assert_ne!(to_string_colored(&value), printed);
}

#[test]
fn non_finite_round_trip() {
    let value = Value::Float(f32::INFINITY);
    assert_eq!(to_string(&value), "inff");
    assert_eq!(from_str("inff").unwrap(), value);

    let value = Value::Double(f64::NEG_INFINITY);
    assert_eq!(to_string(&value), "-infd");
    assert_eq!(from_str("-infd").unwrap(), value);

    assert_eq!(to_string(&Value::Double(f64::NAN)), "NaNd");
}

#[test]
fn printed_form_reparses() {
    // Parse, print, parse again: the notation is stable.
    let input = r#"{"foo":1b,"bar":"\"HelloWorld\"","arr":[I;1,2,3]}"#;
    let value = from_str(input).unwrap();
    assert_eq!(to_string(&value), input);
}
