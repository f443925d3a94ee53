//! Printing of [`mcnbt::Value`] trees as Mojangson text.
//!
//! [`to_string`] produces the plain notation the parser accepts back.
//! [`to_string_colored`] interleaves `§` display codes around tokens for
//! chat/terminal presentation; the codes are cosmetic and change nothing
//! about the underlying grammar.

use mcnbt::{Compound, List, Tag, Value};

const COLOR_NUMBER: &str = "§6";
const COLOR_TYPE: &str = "§c";
const COLOR_STRING: &str = "§a";
const COLOR_KEY: &str = "§b";
const COLOR_RESET: &str = "§r";

/// Render a value as Mojangson.
pub fn to_string(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, false);
    out
}

/// Render a value as Mojangson with `§` display codes.
pub fn to_string_colored(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, true);
    out
}

fn write_value(out: &mut String, value: &Value, color: bool) {
    let mut ints = itoa::Buffer::new();
    let mut floats = ryu::Buffer::new();
    match value {
        Value::Byte(v) => write_number(out, ints.format(*v), "b", color),
        Value::Short(v) => write_number(out, ints.format(*v), "s", color),
        Value::Int(v) => write_number(out, ints.format(*v), "", color),
        Value::Long(v) => write_number(out, ints.format(*v), "L", color),
        Value::Float(v) => write_number(out, floats.format(*v), "f", color),
        Value::Double(v) => write_number(out, floats.format(*v), "d", color),
        Value::ByteArray(v) => write_array(out, Tag::ByteArray, v.iter().copied(), color),
        Value::String(v) => write_string(out, v, color),
        Value::List(v) => write_list(out, v, color),
        Value::Compound(v) => write_compound(out, v, color),
        Value::IntArray(v) => write_array(out, Tag::IntArray, v.iter().copied(), color),
        Value::LongArray(v) => write_array(out, Tag::LongArray, v.iter().copied(), color),
    }
}

fn write_number(out: &mut String, formatted: &str, suffix: &str, color: bool) {
    if color {
        out.push_str(COLOR_NUMBER);
        out.push_str(formatted);
        if !suffix.is_empty() {
            out.push_str(COLOR_TYPE);
            out.push_str(suffix);
        }
        out.push_str(COLOR_RESET);
    } else {
        out.push_str(formatted);
        out.push_str(suffix);
    }
}

// The array letters match the parser exactly: B, I and L. Byte and Long
// elements carry the letter as a suffix, Int elements are bare.
fn array_letter(tag: Tag) -> &'static str {
    match tag {
        Tag::ByteArray => "B",
        Tag::LongArray => "L",
        _ => "I",
    }
}

fn array_suffix(tag: Tag) -> &'static str {
    match tag {
        Tag::ByteArray => "B",
        Tag::LongArray => "L",
        _ => "",
    }
}

fn write_array<T: itoa::Integer>(
    out: &mut String,
    tag: Tag,
    elements: impl Iterator<Item = T>,
    color: bool,
) {
    let mut ints = itoa::Buffer::new();
    out.push('[');
    if color {
        out.push_str(COLOR_TYPE);
        out.push_str(array_letter(tag));
        out.push_str(COLOR_RESET);
    } else {
        out.push_str(array_letter(tag));
    }
    out.push(';');
    let mut first = true;
    for element in elements {
        if !first {
            out.push_str(if color { ", " } else { "," });
        }
        first = false;
        write_number(out, ints.format(element), array_suffix(tag), color);
    }
    out.push(']');
}

fn write_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
}

fn write_string(out: &mut String, s: &str, color: bool) {
    out.push('"');
    if color {
        out.push_str(COLOR_STRING);
    }
    write_escaped(out, s);
    if color {
        out.push_str(COLOR_RESET);
    }
    out.push('"');
}

fn write_list(out: &mut String, list: &List, color: bool) {
    out.push('[');
    let mut first = true;
    for element in list.iter() {
        if !first {
            out.push_str(if color { ", " } else { "," });
        }
        first = false;
        write_value(out, element, color);
    }
    out.push(']');
}

fn write_compound(out: &mut String, compound: &Compound, color: bool) {
    out.push('{');
    let mut first = true;
    for (key, value) in compound.iter() {
        if !first {
            out.push_str(if color { ", " } else { "," });
        }
        first = false;
        out.push('"');
        if color {
            out.push_str(COLOR_KEY);
        }
        write_escaped(out, key);
        if color {
            out.push_str(COLOR_RESET);
        }
        out.push('"');
        out.push(':');
        if color {
            out.push(' ');
        }
        write_value(out, value, color);
    }
    out.push('}');
}
