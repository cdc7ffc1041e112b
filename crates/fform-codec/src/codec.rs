//! Bidirectional conversion between [`PrimitiveValue`] and control keys.
//!
//! Selection controls (select, radio group, checkbox group) key their items
//! by string. [`encode`] turns any primitive into such a key and [`decode`]
//! recovers the primitive.
//!
//! # Invariants
//!
//! 1. **Total**: both functions accept every input and never panic.
//! 2. **Priority order**: markers are checked in [`Marker::ALL`] order before
//!    any fallback, in both directions.
//! 3. **Round trip on homogeneous sets**: for values drawn from a set that is
//!    all strings or all numbers (or any mix of the marker primitives with
//!    one of those), `decode(&encode(&v)) == v`.
//!
//! # Mixed domains
//!
//! The string `"5"` and the number `5` both encode to `"5"`, and `"5"`
//! decodes to the number. The codec is therefore not a bijection over mixed
//! string/number domains. Option sets are homogeneous at every call site, and
//! lookups through [`ValueMaps`](crate::maps::ValueMaps) resolve keys against
//! the option set itself, which keeps string options like `"5"` intact.

use std::sync::LazyLock;

use regex::Regex;

use crate::marker::Marker;
use crate::value::PrimitiveValue;

/// Signed decimal numeral: optional minus, digits, optional fraction.
static NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?$").expect("numeral pattern is a valid regex")
});

/// Encode a primitive as a collision-free control key.
#[must_use]
pub fn encode(value: &PrimitiveValue) -> String {
    match Marker::for_value(value) {
        Some(marker) => marker.as_str().to_owned(),
        None => value.to_string(),
    }
}

/// Decode a control key back into a primitive.
///
/// Markers decode to their primitive, numerals decode to numbers, anything
/// else is the string itself.
#[must_use]
pub fn decode(key: &str) -> PrimitiveValue {
    if let Some(marker) = Marker::from_marker_str(key) {
        return marker.value();
    }
    if is_numeral(key) {
        if let Ok(n) = key.parse::<f64>() {
            return PrimitiveValue::Number(n);
        }
    }
    PrimitiveValue::String(key.to_owned())
}

/// Whether `key` decodes as a number.
#[must_use]
pub fn is_numeral(key: &str) -> bool {
    NUMERAL.is_match(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_markers_in_priority_order() {
        assert_eq!(encode(&PrimitiveValue::from("")), "__empty__");
        assert_eq!(encode(&PrimitiveValue::Undefined), "__undefined__");
        assert_eq!(encode(&PrimitiveValue::Null), "__null__");
        assert_eq!(encode(&PrimitiveValue::Number(f64::NAN)), "__NaN__");
        assert_eq!(encode(&PrimitiveValue::Number(f64::INFINITY)), "__Infinity__");
        assert_eq!(
            encode(&PrimitiveValue::Number(f64::NEG_INFINITY)),
            "__-Infinity__"
        );
        assert_eq!(encode(&PrimitiveValue::from(false)), "__false__");
        assert_eq!(encode(&PrimitiveValue::from(true)), "__true__");
    }

    #[test]
    fn encodes_ordinary_values_as_text() {
        assert_eq!(encode(&PrimitiveValue::from("us")), "us");
        assert_eq!(encode(&PrimitiveValue::from(5)), "5");
        assert_eq!(encode(&PrimitiveValue::from(-2.5)), "-2.5");
        assert_eq!(encode(&PrimitiveValue::from(0)), "0");
    }

    #[test]
    fn decodes_markers() {
        for marker in Marker::ALL {
            assert_eq!(decode(marker.as_str()), marker.value());
        }
    }

    #[test]
    fn decodes_numerals_as_numbers() {
        assert_eq!(decode("5"), PrimitiveValue::from(5));
        assert_eq!(decode("-12"), PrimitiveValue::from(-12));
        assert_eq!(decode("0.25"), PrimitiveValue::from(0.25));
        assert_eq!(decode("007"), PrimitiveValue::from(7));
    }

    #[test]
    fn non_numerals_stay_strings() {
        for s in ["1.", ".5", "+3", "1e5", "1,5", "NaN", "Infinity", " 4", "\u{0663}"] {
            assert_eq!(decode(s), PrimitiveValue::from(s), "{s:?}");
        }
    }

    #[test]
    fn undefined_does_not_become_text() {
        let round = decode(&encode(&PrimitiveValue::Undefined));
        assert_eq!(round, PrimitiveValue::Undefined);
        assert_ne!(round, PrimitiveValue::from("undefined"));
    }

    #[test]
    fn literal_keyword_strings_stay_strings() {
        assert_eq!(decode(&encode(&PrimitiveValue::from("null"))), PrimitiveValue::from("null"));
        assert_eq!(decode(&encode(&PrimitiveValue::from("true"))), PrimitiveValue::from("true"));
    }

    #[test]
    fn numeric_string_collapses_to_number() {
        assert_eq!(encode(&PrimitiveValue::from("5")), encode(&PrimitiveValue::from(5)));
        assert_eq!(decode(&encode(&PrimitiveValue::from("5"))), PrimitiveValue::from(5));
    }

    #[test]
    fn negative_zero_round_trips_as_zero() {
        assert_eq!(encode(&PrimitiveValue::from(-0.0)), "0");
        assert_eq!(decode("0"), PrimitiveValue::from(-0.0));
    }
}
