#![forbid(unsafe_code)]

//! Form store, field handles and the validation contract.
//!
//! A [`FormApi`] owns the values of one form together with per-field
//! [`FieldMeta`]. Renderers get a [`FieldHandle`] through
//! [`FormApi::field`] and a [`FieldLens`] naming the slot they edit.

pub mod api;
pub mod field;
pub mod lens;
pub mod state;
pub mod validate;

pub use api::{FormApi, FormOptions, SubmitError};
pub use field::FieldHandle;
pub use lens::FieldLens;
pub use state::{FieldMeta, FieldState, FormState, ValidationError};
pub use validate::{FieldErrors, ValidationTrigger, ValidationTriggers, Validator};
