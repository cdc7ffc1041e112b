#![forbid(unsafe_code)]

//! Field renderers for fform.
//!
//! Each renderer binds one form field to one control capability:
//!
//! | Renderer | Capability | Field type |
//! |----------|------------|------------|
//! | [`TextField`] | [`TextCapable`] | `String` |
//! | [`SelectField`], [`RadioGroupField`] | [`SelectCapable`] | any [`OptionValue`](fform_codec::OptionValue) |
//! | [`CheckboxGroupField`] | [`GroupCapable`] | `Vec<T>` of option values |
//! | [`SwitchField`], [`CheckboxField`] | [`ToggleCapable`] | `bool` |
//! | [`SliderField`] | [`RangeCapable`] | any [`RangeValue`] |
//!
//! [`InfoField`] sits next to any of them and shows validation feedback.

pub mod capability;
pub mod checkbox_group;
pub mod choices;
pub mod info;
pub mod select;
pub mod slider;
pub mod text;
pub mod toggle;

pub use capability::{
    ChoiceItem, FieldView, GroupCapable, Range, RangeCapable, SelectCapable, TextCapable,
    ToggleCapable,
};
pub use checkbox_group::CheckboxGroupField;
pub use choices::Choices;
pub use info::{InfoField, InfoStyle};
pub use select::{RadioGroupField, SelectField};
pub use slider::{RangeValue, SliderField};
pub use text::TextField;
pub use toggle::{CheckboxField, SwitchField};
