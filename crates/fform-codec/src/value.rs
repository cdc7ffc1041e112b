//! The primitive value domain shared by form storage and option lists.
//!
//! # Equality
//!
//! [`PrimitiveValue`] compares with same-value-zero semantics: `NaN` equals
//! `NaN` and `+0` equals `-0`. This makes the type a total equivalence
//! relation, so it can key a `HashMap` the same way option values key the
//! lookup tables in [`crate::maps`].

use core::fmt;
use core::hash::{Hash, Hasher};

/// A string, number, boolean, null or undefined value.
#[derive(Clone, Debug, Default)]
pub enum PrimitiveValue {
    /// Absent value. Distinct from [`PrimitiveValue::Null`].
    #[default]
    Undefined,
    /// Explicit empty value.
    Null,
    Bool(bool),
    /// Any IEEE-754 double, including `NaN` and the infinities.
    Number(f64),
    String(String),
}

impl PrimitiveValue {
    /// Borrow the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl PartialEq for PrimitiveValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for PrimitiveValue {}

impl Hash for PrimitiveValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::Undefined | Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => canonical_bits(*n).hash(state),
            Self::String(s) => s.hash(state),
        }
    }
}

/// Bit pattern that agrees with same-value-zero equality.
fn canonical_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0.0_f64.to_bits()
    } else {
        n.to_bits()
    }
}

/// Renders the value the way a string-only control would show it.
///
/// Finite numbers never use exponent notation, and negative zero renders
/// as `0`.
impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_nan() => f.write_str("NaN"),
            Self::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Number(n) if *n == 0.0 => f.write_str("0"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for PrimitiveValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PrimitiveValue {
                fn from(value: $t) -> Self {
                    Self::Number(f64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, u8, u16, u32, f32);

impl<T: Into<PrimitiveValue>> From<Option<T>> for PrimitiveValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::PrimitiveValue;
    use core::fmt;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Largest integer an `f64` represents exactly.
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    impl Serialize for PrimitiveValue {
        #[allow(clippy::cast_possible_truncation)]
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Undefined | Self::Null => serializer.serialize_none(),
                Self::Bool(b) => serializer.serialize_bool(*b),
                Self::Number(n) if !n.is_finite() => serializer.serialize_none(),
                Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                    serializer.serialize_i64(*n as i64)
                }
                Self::Number(n) => serializer.serialize_f64(*n),
                Self::String(s) => serializer.serialize_str(s),
            }
        }
    }

    struct PrimitiveVisitor;

    impl<'de> Visitor<'de> for PrimitiveVisitor {
        type Value = PrimitiveValue;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number, boolean or null")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(PrimitiveValue::Null)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(PrimitiveValue::Null)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(PrimitiveValue::Bool(v))
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(PrimitiveValue::Number(v as f64))
        }

        #[allow(clippy::cast_precision_loss)]
        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(PrimitiveValue::Number(v as f64))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(PrimitiveValue::Number(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(PrimitiveValue::String(v.to_owned()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(PrimitiveValue::String(v))
        }
    }

    impl<'de> Deserialize<'de> for PrimitiveValue {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(PrimitiveVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nan_equals_nan() {
        assert_eq!(
            PrimitiveValue::Number(f64::NAN),
            PrimitiveValue::Number(f64::NAN)
        );
    }

    #[test]
    fn signed_zeros_are_equal_and_hash_alike() {
        let mut set = HashSet::new();
        set.insert(PrimitiveValue::Number(0.0));
        assert!(set.contains(&PrimitiveValue::Number(-0.0)));
    }

    #[test]
    fn variants_never_cross_compare() {
        assert_ne!(PrimitiveValue::Null, PrimitiveValue::Undefined);
        assert_ne!(PrimitiveValue::from("5"), PrimitiveValue::from(5));
        assert_ne!(PrimitiveValue::from(false), PrimitiveValue::from(""));
    }

    #[test]
    fn display_matches_control_text() {
        assert_eq!(PrimitiveValue::from(5).to_string(), "5");
        assert_eq!(PrimitiveValue::from(1.5).to_string(), "1.5");
        assert_eq!(PrimitiveValue::from(-0.0).to_string(), "0");
        assert_eq!(PrimitiveValue::from(1e21).to_string(), "1000000000000000000000");
        assert_eq!(PrimitiveValue::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(PrimitiveValue::Undefined.to_string(), "undefined");
    }

    #[test]
    fn option_none_is_null() {
        assert_eq!(PrimitiveValue::from(None::<i32>), PrimitiveValue::Null);
        assert_eq!(PrimitiveValue::from(Some(3)), PrimitiveValue::Number(3.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_json_scalars() {
        let values = vec![
            PrimitiveValue::from(1),
            PrimitiveValue::from(1.25),
            PrimitiveValue::Null,
            PrimitiveValue::Number(f64::NAN),
            PrimitiveValue::from("x"),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[1,1.25,null,null,"x"]"#);

        let back: Vec<PrimitiveValue> = serde_json::from_str(r#"[1,true,null,"y"]"#).unwrap();
        assert_eq!(
            back,
            vec![
                PrimitiveValue::from(1),
                PrimitiveValue::from(true),
                PrimitiveValue::Null,
                PrimitiveValue::from("y"),
            ]
        );
    }
}
