//! Registry dispatch tests

use bytes::Bytes;
use slotcodec::codec::{
    decode_value, encode_value, AdapterContext, CodecKind, ComplexValue, PrimitiveType,
    PrimitiveValue,
};
use slotcodec::item::Item;
use slotcodec::space::Location;
use slotcodec::CodecError;

fn sample_values() -> Vec<ComplexValue> {
    vec![
        ComplexValue::Item(Item::new("EMERALD", 7)),
        ComplexValue::Items(vec![Item::new("ARROW", 32), Item::new("BOW", 1)]),
        ComplexValue::Location(Location::detached(10.5, 70.0, -3.25)),
        ComplexValue::Strings(vec!["north".to_string(), "south".to_string()]),
    ]
}

#[test]
fn test_encode_decode_every_kind() {
    let ctx = AdapterContext::detached();

    for value in sample_values() {
        let kind = value.kind();
        let payload = encode_value(&value, &ctx);

        assert_eq!(payload.primitive_type(), kind.primitive_type());
        assert_eq!(decode_value(kind, &payload, &ctx).unwrap(), value);
    }
}

#[test]
fn test_decode_wrong_primitive_kind() {
    let ctx = AdapterContext::detached();
    let payload = PrimitiveValue::Longs(vec![0; 5]);

    let err = decode_value(CodecKind::StringList, &payload, &ctx).unwrap_err();

    match err {
        CodecError::TypeMismatch {
            expected, found, ..
        } => {
            assert_eq!(expected, PrimitiveType::Bytes);
            assert_eq!(found, PrimitiveType::Longs);
        }
        other => panic!("Expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_decode_corrupt_payload_is_not_an_error() {
    let ctx = AdapterContext::detached();
    let payload = PrimitiveValue::Bytes(Bytes::from_static(b"\0\0garbage"));

    let value = decode_value(CodecKind::ItemStack, &payload, &ctx).unwrap();

    match value {
        ComplexValue::Item(item) => assert!(item.is_error_marker()),
        other => panic!("Expected item, got {:?}", other),
    }
}

#[test]
fn test_codec_names() {
    let names: Vec<String> = CodecKind::ALL.iter().map(ToString::to_string).collect();

    assert_eq!(names, vec!["item-stack", "item-stack-list", "location", "string-list"]);
    assert_eq!("location".parse::<CodecKind>().unwrap(), CodecKind::Location);
}
