//! Value/key lookup tables for a fixed option set.
//!
//! A selection control renders string keys; the form stores typed values.
//! [`ValueMaps`] is built once per option set and translates in both
//! directions in O(1).
//!
//! # Invariants
//!
//! 1. **Round trip**: for every value `v` the maps were built from,
//!    `maps.decode(maps.encode(&v)?) == Some(&v)`, unless a later value in
//!    the source shares `v`'s key.
//! 2. **Last write wins**: when two source values encode to the same key,
//!    `decode` returns the later one. `encode` still knows both.
//!    A set mixing the string `"1"` and the number `1` hits this: both
//!    encode to `"1"`, and the key decodes to whichever came last.
//! 3. **Immutable**: there is no mutation API. A new option set means a new
//!    `ValueMaps`.

use std::collections::HashMap;
use std::hash::Hash;

use crate::codec::{decode, encode};
use crate::value::PrimitiveValue;

/// A typed option value that converts to and from [`PrimitiveValue`].
///
/// Implemented for the primitive carriers (`String`, `bool`, integers,
/// `Option<T>`) and for `PrimitiveValue` itself. Application enums implement
/// it by mapping each variant to a string.
pub trait OptionValue: Clone + Eq + Hash {
    /// Project into the primitive domain.
    fn to_primitive(&self) -> PrimitiveValue;

    /// Recover a typed value, or `None` if `value` is outside this type.
    fn from_primitive(value: PrimitiveValue) -> Option<Self>;

    /// The value a clearable control resets to, if the type has one.
    fn cleared() -> Option<Self> {
        None
    }
}

impl OptionValue for PrimitiveValue {
    fn to_primitive(&self) -> PrimitiveValue {
        self.clone()
    }

    fn from_primitive(value: PrimitiveValue) -> Option<Self> {
        Some(value)
    }

    fn cleared() -> Option<Self> {
        Some(Self::Undefined)
    }
}

impl OptionValue for String {
    fn to_primitive(&self) -> PrimitiveValue {
        PrimitiveValue::String(self.clone())
    }

    fn from_primitive(value: PrimitiveValue) -> Option<Self> {
        match value {
            PrimitiveValue::String(s) => Some(s),
            _ => None,
        }
    }

    fn cleared() -> Option<Self> {
        Some(Self::new())
    }
}

impl OptionValue for bool {
    fn to_primitive(&self) -> PrimitiveValue {
        PrimitiveValue::Bool(*self)
    }

    fn from_primitive(value: PrimitiveValue) -> Option<Self> {
        value.as_bool()
    }
}

macro_rules! impl_option_value_int {
    ($($t:ty),*) => {
        $(
            impl OptionValue for $t {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_primitive(&self) -> PrimitiveValue {
                    PrimitiveValue::Number(*self as f64)
                }

                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss,
                    clippy::cast_lossless
                )]
                fn from_primitive(value: PrimitiveValue) -> Option<Self> {
                    let n = value.as_f64()?;
                    // `MAX as f64` rounds up for 64-bit types, so compare
                    // against the exact power of two one past `MAX`.
                    let bits = <$t>::BITS as i32;
                    let upper = if <$t>::MIN == 0 {
                        2f64.powi(bits)
                    } else {
                        2f64.powi(bits - 1)
                    };
                    if n.fract() != 0.0 || n < <$t>::MIN as f64 || n >= upper {
                        return None;
                    }
                    Some(n as $t)
                }
            }
        )*
    };
}

impl_option_value_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl<T: OptionValue> OptionValue for Option<T> {
    fn to_primitive(&self) -> PrimitiveValue {
        self.as_ref()
            .map_or(PrimitiveValue::Null, OptionValue::to_primitive)
    }

    fn from_primitive(value: PrimitiveValue) -> Option<Self> {
        match value {
            PrimitiveValue::Null | PrimitiveValue::Undefined => Some(None),
            other => T::from_primitive(other).map(Some),
        }
    }

    fn cleared() -> Option<Self> {
        Some(None)
    }
}

/// Encode a typed value as a control key.
#[must_use]
pub fn encode_value<T: OptionValue>(value: &T) -> String {
    encode(&value.to_primitive())
}

/// Decode a control key into a typed value, if the decoded primitive fits `T`.
#[must_use]
pub fn decode_value<T: OptionValue>(key: &str) -> Option<T> {
    T::from_primitive(decode(key))
}

/// One entry of a selection control: a typed value and its display label.
///
/// Order within an option list is display order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
}

impl<T> SelectOption<T> {
    /// Create an option.
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Bidirectional value/key lookup tables for one option set.
#[derive(Clone, Debug)]
pub struct ValueMaps<T: OptionValue> {
    to_string: HashMap<T, String>,
    to_value: HashMap<String, T>,
}

impl<T: OptionValue> ValueMaps<T> {
    /// Key for `value`, if it belongs to the option set.
    #[must_use]
    pub fn encode(&self, value: &T) -> Option<&str> {
        self.to_string.get(value).map(String::as_str)
    }

    /// Value for `key`, if the key belongs to the option set.
    #[must_use]
    pub fn decode(&self, key: &str) -> Option<&T> {
        self.to_value.get(key)
    }

    /// Number of distinct values.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.to_string.len()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.to_value.len()
    }

    /// Number of selectable keys; same as [`key_count`](Self::key_count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_value.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_value.is_empty()
    }

    /// Whether `key` resolves to a value in this set.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.to_value.contains_key(key)
    }
}

/// Build lookup tables from an ordered sequence of values.
///
/// One pass, one codec call per entry.
pub fn build_value_maps<T: OptionValue>(values: impl IntoIterator<Item = T>) -> ValueMaps<T> {
    let iter = values.into_iter();
    let (lower, _) = iter.size_hint();
    let mut to_string = HashMap::with_capacity(lower);
    let mut to_value = HashMap::with_capacity(lower);
    for value in iter {
        let key = encode_value(&value);
        to_value.insert(key.clone(), value.clone());
        to_string.insert(value, key);
    }
    ValueMaps {
        to_string,
        to_value,
    }
}

/// Build lookup tables from an option list, using each option's value.
pub fn build_value_maps_from_options<'a, T: OptionValue + 'a>(
    options: impl IntoIterator<Item = &'a SelectOption<T>>,
) -> ValueMaps<T> {
    build_value_maps(options.into_iter().map(|option| option.value.clone()))
}
