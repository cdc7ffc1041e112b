//! Property tests for the codec laws.
//!
//! # Invariants
//!
//! 1. Values from a homogeneous set survive `decode(encode(v))`.
//! 2. `encode` produces a marker only for the marker's own primitive.
//! 3. Value maps built from distinct values are the same size both ways.

use fform_codec::{Marker, OptionValue, PrimitiveValue, build_value_maps, decode, encode};
use proptest::prelude::*;

/// Text that does not look like a numeral, so it stays a string.
fn text_value() -> impl Strategy<Value = String> {
    "[a-zA-Z_ -]{0,12}".prop_filter("numerals and markers do not decode to text", |s| {
        !fform_codec::is_numeral(s) && !Marker::is_reserved(s)
    })
}

fn number_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<i32>().prop_map(f64::from),
        (-1.0e6_f64..1.0e6_f64),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(-0.0),
    ]
}

fn special_value() -> impl Strategy<Value = PrimitiveValue> {
    prop_oneof![
        Just(PrimitiveValue::Undefined),
        Just(PrimitiveValue::Null),
        any::<bool>().prop_map(PrimitiveValue::Bool),
    ]
}

proptest! {
    #[test]
    fn string_sets_round_trip(s in text_value()) {
        let v = PrimitiveValue::String(s);
        prop_assert_eq!(decode(&encode(&v)), v);
    }

    #[test]
    fn number_sets_round_trip(n in number_value()) {
        let v = PrimitiveValue::Number(n);
        prop_assert_eq!(decode(&encode(&v)), v);
    }

    #[test]
    fn special_values_round_trip(v in special_value()) {
        prop_assert_eq!(decode(&encode(&v)), v);
    }

    #[test]
    fn integers_round_trip_through_typed_values(n in any::<i32>()) {
        let key = fform_codec::encode_value(&i64::from(n));
        prop_assert_eq!(fform_codec::decode_value::<i64>(&key), Some(i64::from(n)));
    }

    #[test]
    fn no_false_marker_collisions(s in "\\PC{0,16}", n in number_value(), b in any::<bool>()) {
        prop_assume!(!Marker::is_reserved(&s));
        for v in [
            PrimitiveValue::String(s.clone()),
            PrimitiveValue::Number(n),
            PrimitiveValue::Bool(b),
        ] {
            let key = encode(&v);
            if let Some(marker) = Marker::from_marker_str(&key) {
                prop_assert!(marker.matches(&v), "{:?} encoded to {}", v, marker);
            }
        }
    }

    #[test]
    fn distinct_values_build_equal_sized_maps(
        values in prop::collection::hash_set(text_value(), 0..20)
    ) {
        let values: Vec<String> = values.into_iter().collect();
        let maps = build_value_maps(values.clone());
        prop_assert_eq!(maps.value_count(), values.len());
        prop_assert_eq!(maps.key_count(), values.len());
        for v in &values {
            let key = maps.encode(v).map(str::to_owned);
            prop_assert_eq!(key.as_deref().and_then(|k| maps.decode(k)), Some(v));
            prop_assert_eq!(String::from_primitive(v.to_primitive()), Some(v.clone()));
        }
    }
}

#[test]
fn marker_text_as_option_is_reserved() {
    // Option values that spell a marker are outside the supported alphabet:
    // they decode to the marker's primitive, not to themselves.
    let v = PrimitiveValue::from("__null__");
    assert_eq!(encode(&v), "__null__");
    assert_eq!(decode(&encode(&v)), PrimitiveValue::Null);
}
