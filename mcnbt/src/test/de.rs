use super::builder::Builder;
use crate::{from_base64, from_bytes, from_bytes_le, to_bytes, Tag, Value};

#[test]
fn simple_compound() {
    let payload = [10, 0, 0, 1, 0, 3, 102, 111, 111, 1, 0];
    let root = from_bytes(&payload).unwrap();
    let compound = root.as_compound().unwrap();
    assert_eq!(compound.byte("foo"), Some(1));
    assert_eq!(compound.len(), 1);
}

#[test]
fn scalar_root() {
    let payload = [1, 0, 0, 42];
    assert_eq!(from_bytes(&payload).unwrap(), Value::Byte(42));
}

#[test]
fn root_end_rejected() {
    let e = from_bytes(&[0]).unwrap_err();
    assert!(e.is_format());
}

#[test]
fn unknown_tag_byte() {
    let e = from_bytes(&[13, 0, 0]).unwrap_err();
    assert!(e.is_format());
    assert!(e.to_string().contains("13"));
}

#[test]
fn truncated_input() {
    let payload = [10, 0, 0, 1, 0, 3, 102];
    let e = from_bytes(&payload).unwrap_err();
    assert!(e.is_format());
}

#[test]
fn empty_input() {
    assert!(from_bytes(&[]).is_err());
}

#[test]
fn little_endian_int() {
    let payload = [10, 0, 0, 3, 3, 0, 110, 117, 109, 1, 0, 0, 0, 0];
    let root = from_bytes_le(&payload).unwrap();
    assert_eq!(root.as_compound().unwrap().int("num"), Some(1));
}

#[test]
fn list_of_compounds() {
    let payload = Builder::new()
        .start_compound("")
        .start_list("list", Tag::Compound, 2)
        .start_anon_compound()
        .byte("a", 1)
        .end_anon_compound()
        .start_anon_compound()
        .byte("a", 2)
        .end_anon_compound()
        .end_compound()
        .build();

    let root = from_bytes(&payload).unwrap();
    let list = root.as_compound().unwrap().list("list").unwrap();
    assert_eq!(list.tag(), Tag::Compound);
    assert_eq!(list[0].as_compound().unwrap().byte("a"), Some(1));
    assert_eq!(list[1].as_compound().unwrap().byte("a"), Some(2));
}

#[test]
fn list_of_ints() {
    let payload = Builder::new()
        .start_compound("")
        .start_list("ints", Tag::Int, 2)
        .int_payload(5)
        .int_payload(-5)
        .end_compound()
        .build();

    let root = from_bytes(&payload).unwrap();
    let list = root.as_compound().unwrap().list("ints").unwrap();
    assert_eq!(**list, [Value::Int(5), Value::Int(-5)]);
}

#[test]
fn empty_list_keeps_element_kind() {
    let payload = Builder::new()
        .start_compound("")
        .start_list("bytes", Tag::Byte, 0)
        .end_compound()
        .build();

    let root = from_bytes(&payload).unwrap();
    let list = root.as_compound().unwrap().list("bytes").unwrap();
    assert_eq!(list.tag(), Tag::Byte);
    assert!(list.is_empty());

    // Byte-exact re-encode of the declared element kind.
    assert_eq!(to_bytes(&root).unwrap(), payload);
}

#[test]
fn end_element_list_is_empty() {
    let payload = Builder::new()
        .start_compound("")
        .start_list("nothing", Tag::End, 3)
        .end_compound()
        .build();

    let root = from_bytes(&payload).unwrap();
    let list = root.as_compound().unwrap().list("nothing").unwrap();
    assert_eq!(list.tag(), Tag::End);
    assert!(list.is_empty());
}

#[test]
fn negative_length_is_empty() {
    let payload = Builder::new()
        .start_compound("")
        .tag(Tag::ByteArray)
        .name("arr")
        .int_payload(-1)
        .end_compound()
        .build();

    let root = from_bytes(&payload).unwrap();
    assert_eq!(root.as_compound().unwrap().byte_array("arr"), Some(&[][..]));
}

#[test]
fn supplementary_plane_string() {
    // U+1D54A is a surrogate pair, so two 3-byte sequences on the wire.
    let payload = Builder::new()
        .start_compound("")
        .string("s", "double-struck 𝕊")
        .end_compound()
        .build();

    let root = from_bytes(&payload).unwrap();
    assert_eq!(
        root.as_compound().unwrap().string("s"),
        Some("double-struck 𝕊")
    );
    assert_eq!(to_bytes(&root).unwrap(), payload);
}

#[test]
fn base64_literal() {
    let root = from_base64("CgAAAQADZm9vAQA=").unwrap();
    assert_eq!(root.as_compound().unwrap().byte("foo"), Some(1));
}

#[test]
fn base64_padding_optional() {
    let root = from_base64("CgAAAQADZm9vAQA").unwrap();
    assert_eq!(root.as_compound().unwrap().byte("foo"), Some(1));
}

#[test]
fn base64_impossible_length() {
    let e = from_base64("A").unwrap_err();
    assert!(e.is_format());
}
