//! Reserved sentinel strings for primitives a string-only control cannot
//! carry as themselves.
//!
//! # Invariants
//!
//! 1. **Closed set**: exactly eight markers exist, listed in [`Marker::ALL`]
//!    in codec priority order.
//! 2. **No false collisions**: a marker is produced only for the primitive it
//!    represents. Every marker is wrapped in `__`, an alphabet option values
//!    are not expected to use, and no marker matches the numeral pattern.
//! 3. **Bijective on the set**: `Marker::from_marker_str(m.as_str()) == Some(m)`.

use core::fmt;

use crate::value::PrimitiveValue;

/// One of the reserved sentinel strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The empty string.
    Empty,
    Undefined,
    Null,
    NaN,
    /// Positive infinity.
    Infinity,
    NegativeInfinity,
    False,
    True,
}

impl Marker {
    /// All markers, in the order the codec checks them.
    ///
    /// The order matters: `false` and `""` are both "empty-ish" and must be
    /// told apart before any fallback applies.
    pub const ALL: [Self; 8] = [
        Self::Empty,
        Self::Undefined,
        Self::Null,
        Self::NaN,
        Self::Infinity,
        Self::NegativeInfinity,
        Self::False,
        Self::True,
    ];

    /// The sentinel string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "__empty__",
            Self::Undefined => "__undefined__",
            Self::Null => "__null__",
            Self::NaN => "__NaN__",
            Self::Infinity => "__Infinity__",
            Self::NegativeInfinity => "__-Infinity__",
            Self::False => "__false__",
            Self::True => "__true__",
        }
    }

    /// The primitive this marker stands for.
    #[must_use]
    pub fn value(self) -> PrimitiveValue {
        match self {
            Self::Empty => PrimitiveValue::String(String::new()),
            Self::Undefined => PrimitiveValue::Undefined,
            Self::Null => PrimitiveValue::Null,
            Self::NaN => PrimitiveValue::Number(f64::NAN),
            Self::Infinity => PrimitiveValue::Number(f64::INFINITY),
            Self::NegativeInfinity => PrimitiveValue::Number(f64::NEG_INFINITY),
            Self::False => PrimitiveValue::Bool(false),
            Self::True => PrimitiveValue::Bool(true),
        }
    }

    /// Whether `value` is exactly the primitive this marker represents.
    #[must_use]
    pub fn matches(self, value: &PrimitiveValue) -> bool {
        match (self, value) {
            (Self::Empty, PrimitiveValue::String(s)) => s.is_empty(),
            (Self::Undefined, PrimitiveValue::Undefined) | (Self::Null, PrimitiveValue::Null) => {
                true
            }
            (Self::NaN, PrimitiveValue::Number(n)) => n.is_nan(),
            (Self::Infinity, PrimitiveValue::Number(n)) => *n == f64::INFINITY,
            (Self::NegativeInfinity, PrimitiveValue::Number(n)) => *n == f64::NEG_INFINITY,
            (Self::False, PrimitiveValue::Bool(b)) => !*b,
            (Self::True, PrimitiveValue::Bool(b)) => *b,
            _ => false,
        }
    }

    /// The first marker, in priority order, that represents `value`.
    #[must_use]
    pub fn for_value(value: &PrimitiveValue) -> Option<Self> {
        Self::ALL.into_iter().find(|marker| marker.matches(value))
    }

    /// Parse a sentinel string back into its marker.
    #[must_use]
    pub fn from_marker_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|marker| marker.as_str() == s)
    }

    /// Whether `s` is one of the reserved sentinel strings.
    #[must_use]
    pub fn is_reserved(s: &str) -> bool {
        Self::from_marker_str(s).is_some()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sentinel_strings_are_distinct() {
        let strings: HashSet<_> = Marker::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(strings.len(), Marker::ALL.len());
    }

    #[test]
    fn from_marker_str_inverts_as_str() {
        for marker in Marker::ALL {
            assert_eq!(Marker::from_marker_str(marker.as_str()), Some(marker));
        }
        assert_eq!(Marker::from_marker_str("__maybe__"), None);
        assert_eq!(Marker::from_marker_str("null"), None);
    }

    #[test]
    fn each_marker_matches_only_its_value() {
        for marker in Marker::ALL {
            for other in Marker::ALL {
                assert_eq!(
                    marker.matches(&other.value()),
                    marker == other,
                    "{marker} vs {other}"
                );
            }
        }
    }

    #[test]
    fn ordinary_values_have_no_marker() {
        for value in [
            PrimitiveValue::from("a"),
            PrimitiveValue::from(0),
            PrimitiveValue::from(-1.5),
            PrimitiveValue::from("false"),
            PrimitiveValue::from("__"),
        ] {
            assert_eq!(Marker::for_value(&value), None, "{value:?}");
        }
    }

    #[test]
    fn display_is_sentinel() {
        assert_eq!(Marker::NegativeInfinity.to_string(), "__-Infinity__");
    }
}
