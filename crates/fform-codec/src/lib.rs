#![forbid(unsafe_code)]

//! Collision-free string codec for primitive form values.
//!
//! String-keyed selection controls cannot tell `""`, `null`, `undefined`,
//! `false` or `NaN` apart from ordinary text. This crate provides:
//!
//! - [`PrimitiveValue`]: the tagged union of string, number, boolean, null
//!   and undefined values.
//! - [`Marker`]: the closed set of sentinel keys for the ambiguous
//!   primitives.
//! - [`encode`] / [`decode`]: total conversion between values and keys.
//! - [`ValueMaps`]: per-option-set lookup tables built by
//!   [`build_value_maps`].
//!
//! # Example
//!
//! ```
//! use fform_codec::{PrimitiveValue, SelectOption, build_value_maps_from_options, decode, encode};
//!
//! assert_eq!(encode(&PrimitiveValue::Null), "__null__");
//! assert_eq!(decode("__null__"), PrimitiveValue::Null);
//!
//! let options = [SelectOption::new(1_i64, "One"), SelectOption::new(2, "Two")];
//! let maps = build_value_maps_from_options(&options);
//! assert_eq!(maps.decode("2"), Some(&2));
//! ```

pub mod codec;
pub mod maps;
pub mod marker;
pub mod value;

pub use codec::{decode, encode, is_numeral};
pub use maps::{
    OptionValue, SelectOption, ValueMaps, build_value_maps, build_value_maps_from_options,
    decode_value, encode_value,
};
pub use marker::Marker;
pub use value::PrimitiveValue;
