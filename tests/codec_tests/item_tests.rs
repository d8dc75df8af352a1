//! Item codec tests

use bytes::Bytes;
use serde_yaml::{Mapping, Value};
use slotcodec::codec::{AdapterContext, PersistentType, ITEM_STACK};
use slotcodec::item::{Item, ERROR_ITEM_LABEL, ERROR_ITEM_TYPE, MAX_META_DEPTH};

// =============================================================================
// Helper Functions
// =============================================================================

fn roundtrip(item: &Item) -> Item {
    let ctx = AdapterContext::detached();
    let bytes = ITEM_STACK.to_primitive(item, &ctx);
    assert!(!bytes.is_empty());
    ITEM_STACK.from_primitive(&bytes, &ctx)
}

fn decode(raw: &[u8]) -> Item {
    ITEM_STACK.from_primitive(&Bytes::copy_from_slice(raw), &AdapterContext::detached())
}

// =============================================================================
// Round-trip Tests
// =============================================================================

#[test]
fn test_roundtrip_plain_item() {
    let item = Item::new("COBBLESTONE", 64);
    assert_eq!(roundtrip(&item), item);
}

#[test]
fn test_roundtrip_single_item_omits_amount() {
    let item = Item::new("TORCH", 1);
    assert_eq!(roundtrip(&item), item);
}

#[test]
fn test_roundtrip_nested_meta() {
    let mut enchants = Mapping::new();
    enchants.insert("sharpness".into(), 5.into());
    enchants.insert("unbreaking".into(), 3.into());

    let item = Item::new("DIAMOND_SWORD", 1)
        .with_display_name("&6Excalibur")
        .with_meta("lore", vec!["Forged in YAML", "key: value", "- dash"])
        .with_meta("enchants", Value::Mapping(enchants))
        .with_meta("durability", 0.75)
        .with_meta("unbreakable", true)
        .with_meta("custom-model-data", 1_234_567_i64);

    assert_eq!(roundtrip(&item), item);
}

#[test]
fn test_roundtrip_unicode_and_zero_amount() {
    let item = Item::new("PAPER", 0).with_display_name("ブック \u{1F4D6}");
    assert_eq!(roundtrip(&item), item);
}

// =============================================================================
// Encoding Failure Tests
// =============================================================================

#[test]
fn test_encode_invalid_item_yields_empty_bytes() {
    let bytes = ITEM_STACK.to_primitive(&Item::new("", 3), &AdapterContext::detached());
    assert!(bytes.is_empty());
}

#[test]
fn test_nesting_at_limit_roundtrips_and_deeper_is_rejected() {
    let nested = |depth: usize| {
        (0..depth).fold(Value::from("leaf"), |inner, _| Value::Sequence(vec![inner]))
    };

    let at_limit = Item::new("BOOK", 1).with_meta("pages", nested(MAX_META_DEPTH));
    assert_eq!(roundtrip(&at_limit), at_limit);

    let too_deep = Item::new("BOOK", 1).with_meta("pages", nested(200));
    let bytes = ITEM_STACK.to_primitive(&too_deep, &AdapterContext::detached());
    assert!(bytes.is_empty());
}

// =============================================================================
// Fallback Tests
// =============================================================================

#[test]
fn test_decode_empty_is_error_marker() {
    let item = decode(b"");

    assert_eq!(item.item_type, ERROR_ITEM_TYPE);
    assert_eq!(item.display_name(), Some(ERROR_ITEM_LABEL));
    assert!(item.is_error_marker());
}

#[test]
fn test_decode_missing_key_is_error_marker() {
    assert!(decode(b"items:\n- type: DIRT\n").is_error_marker());
}

#[test]
fn test_decode_wrong_shape_is_error_marker() {
    assert!(decode(b"i: DIRT\n").is_error_marker());
    assert!(decode(b"i:\n- type: DIRT\n").is_error_marker());
}

#[test]
fn test_decode_malformed_yaml_is_error_marker() {
    assert!(decode(b"i: {type: DIRT").is_error_marker());
    assert!(decode(b"\tnot: [valid").is_error_marker());
}

#[test]
fn test_decode_invalid_utf8_is_replaced() {
    let item = decode(b"i:\n  type: DIRT\n  meta:\n    display-name: caf\xe9\n");

    assert_eq!(item, Item::new("DIRT", 1).with_display_name("caf\u{FFFD}"));
}

#[test]
fn test_decode_invalid_utf8_only_is_error_marker() {
    assert!(decode(&[0xc3, 0x28]).is_error_marker());
}

#[test]
fn test_decode_invalid_item_is_error_marker() {
    assert!(decode(b"i:\n  amount: 4\n").is_error_marker());
    assert!(decode(b"i:\n  type: ''\n").is_error_marker());
}

#[test]
fn test_decode_handwritten_document() {
    let item = decode(b"i:\n  v: 3465\n  type: BREAD\n  amount: 12\n  meta:\n    display-name: Loaf\n");

    assert_eq!(item, Item::new("BREAD", 12).with_display_name("Loaf"));
}
