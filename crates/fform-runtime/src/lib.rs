#![forbid(unsafe_code)]

//! Reactive form runtime for fform.
//!
//! This crate provides:
//! - [`reactive`]: observables, batched notification, selections and bindings
//! - [`form`]: the form store ([`FormApi`]), field handles and validation
//! - [`visibility`]: edge-triggered conditional sections
//! - [`Logger`]: an injected, level-filtered front end for `tracing`
//! - [`Preference`]: theme/language style providers
//! - [`FormConfig`]: behavior knobs loaded from TOML or JSON (`config` feature)

#[cfg(feature = "config")]
pub mod config;
pub mod form;
pub mod logging;
pub mod preference;
pub mod reactive;
pub mod visibility;

#[cfg(feature = "config")]
pub use config::{ConfigError, FormConfig};
pub use form::{
    FieldErrors, FieldHandle, FieldLens, FieldMeta, FieldState, FormApi, FormOptions, FormState,
    SubmitError, ValidationError, ValidationTrigger, ValidationTriggers, Validator,
};
pub use logging::{LogLevel, Logger};
pub use preference::{Preference, detect_system_language, system_language};
pub use visibility::{VisibilityObserver, VisibilityState, VisibilityTransition};
