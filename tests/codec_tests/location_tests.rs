//! Location codec tests

use slotcodec::codec::{AdapterContext, PersistentType, LOCATION, LOCATION_WORDS};
use slotcodec::space::{InMemorySpaceRegistry, Location, SpaceRef};
use uuid::Uuid;

// =============================================================================
// Helper Functions
// =============================================================================

fn overworld() -> SpaceRef {
    SpaceRef::new(
        Uuid::from_u128(0x9c1f_4e2a_77d0_4b1e_a5c3_0b6d_2e8f_1a47),
        "overworld",
    )
}

fn registry_with(space: &SpaceRef) -> InMemorySpaceRegistry {
    let registry = InMemorySpaceRegistry::new();
    registry.load(space.clone());
    registry
}

// =============================================================================
// Round-trip Tests
// =============================================================================

#[test]
fn test_bit_exact_without_space() {
    let ctx = AdapterContext::detached();
    let location = Location::detached(1.5, -2.25, 0.0);

    let words = LOCATION.to_primitive(&location, &ctx);
    assert_eq!(words.len(), LOCATION_WORDS);
    assert_eq!(words[3], 0);
    assert_eq!(words[4], 0);

    let decoded = LOCATION.from_primitive(&words, &ctx);
    assert_eq!(decoded.x, 1.5);
    assert_eq!(decoded.y, -2.25);
    assert_eq!(decoded.z, 0.0);
    assert!(decoded.space.is_none());
}

#[test]
fn test_roundtrip_with_loaded_space() {
    let space = overworld();
    let registry = registry_with(&space);
    let ctx = AdapterContext::new(&registry);
    let location = Location::new(space, -1024.125, 64.0, 3.0e9);

    let words = LOCATION.to_primitive(&location, &ctx);

    assert_eq!(LOCATION.from_primitive(&words, &ctx), location);
}

#[test]
fn test_extreme_floats_survive() {
    let ctx = AdapterContext::detached();
    let location = Location::detached(f64::MAX, f64::MIN_POSITIVE, -0.0);

    let decoded = LOCATION.from_primitive(&LOCATION.to_primitive(&location, &ctx), &ctx);

    assert_eq!(decoded.x, f64::MAX);
    assert_eq!(decoded.y, f64::MIN_POSITIVE);
    assert!(decoded.z == 0.0 && decoded.z.is_sign_negative());
}

#[test]
fn test_nan_bits_survive() {
    let ctx = AdapterContext::detached();
    let nan = f64::from_bits(0x7ff8_0000_dead_beef);

    let decoded = LOCATION.from_primitive(&LOCATION.to_primitive(&Location::detached(nan, 0.0, 0.0), &ctx), &ctx);

    assert_eq!(decoded.x.to_bits(), nan.to_bits());
}

// =============================================================================
// Space Resolution Tests
// =============================================================================

#[test]
fn test_unloaded_space_decodes_without_space() {
    let space = overworld();
    let registry = registry_with(&space);
    let ctx = AdapterContext::new(&registry);

    let words = LOCATION.to_primitive(&Location::new(space.clone(), 1.0, 2.0, 3.0), &ctx);
    registry.unload(space.id);

    assert_eq!(
        LOCATION.from_primitive(&words, &ctx),
        Location::detached(1.0, 2.0, 3.0)
    );
}

#[test]
fn test_detached_context_drops_space() {
    let space = overworld();
    let words = LOCATION.to_primitive(&Location::new(space, 4.0, 5.0, 6.0), &AdapterContext::detached());

    assert!(words[3] != 0 || words[4] != 0);
    assert!(LOCATION
        .from_primitive(&words, &AdapterContext::detached())
        .space
        .is_none());
}

#[test]
fn test_nil_space_id_collapses_to_no_space() {
    let nil_space = SpaceRef::new(Uuid::nil(), "void");
    let registry = registry_with(&nil_space);
    let ctx = AdapterContext::new(&registry);

    let words = LOCATION.to_primitive(&Location::new(nil_space, 1.0, 1.0, 1.0), &ctx);

    assert_eq!(&words[3..], &[0, 0]);
    assert!(LOCATION.from_primitive(&words, &ctx).space.is_none());
}

// =============================================================================
// Fallback Tests
// =============================================================================

#[test]
fn test_three_words_decode_to_origin() {
    let words = vec![
        1.0f64.to_bits() as i64,
        2.0f64.to_bits() as i64,
        3.0f64.to_bits() as i64,
    ];

    let decoded = LOCATION.from_primitive(&words, &AdapterContext::detached());

    assert_eq!(decoded, Location::default());
    assert_eq!(decoded, Location::detached(0.0, 0.0, 0.0));
}

#[test]
fn test_empty_words_decode_to_origin() {
    assert_eq!(
        LOCATION.from_primitive(&Vec::new(), &AdapterContext::detached()),
        Location::default()
    );
}
