#![forbid(unsafe_code)]

//! Form and field state records.

use std::collections::BTreeMap;

/// One validation message attached to a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Interaction and validation flags for one field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMeta {
    /// Messages from the most recent validation pass, in validator order.
    pub errors: Vec<ValidationError>,
    /// The user has interacted with the field (blurred it or submitted).
    pub is_touched: bool,
    /// The field has lost focus at least once.
    pub is_blurred: bool,
    /// The value differs from the form's default.
    pub is_dirty: bool,
    /// A validation pass for this field has started and not finished.
    pub is_validating: bool,
}

impl FieldMeta {
    /// Error messages joined with `separator`.
    #[must_use]
    pub fn joined_errors(&self, separator: &str) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// A field's value together with its meta, as seen by a renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldState<T> {
    pub value: T,
    pub meta: FieldMeta,
}

/// The whole form: values plus per-field meta and submission flags.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState<V> {
    pub values: V,
    /// Meta for every field that has been touched, changed or validated.
    pub fields: BTreeMap<String, FieldMeta>,
    pub is_submitting: bool,
    /// The last submission passed validation.
    pub is_submitted: bool,
    pub submission_attempts: u32,
}

impl<V> FormState<V> {
    /// Fresh state with no meta.
    pub fn new(values: V) -> Self {
        Self {
            values,
            fields: BTreeMap::new(),
            is_submitting: false,
            is_submitted: false,
            submission_attempts: 0,
        }
    }

    /// Meta for `name`, or the pristine default.
    #[must_use]
    pub fn field_meta(&self, name: &str) -> FieldMeta {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub(crate) fn meta_mut(&mut self, name: &str) -> &mut FieldMeta {
        self.fields.entry(name.to_owned()).or_default()
    }

    /// Any field differs from its default.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.fields.values().any(|m| m.is_dirty)
    }

    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.fields.values().any(|m| m.is_touched)
    }

    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.fields.values().any(|m| m.is_validating)
    }

    /// No field carries an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|m| m.errors.is_empty())
    }

    /// Submission is allowed: not already submitting, and either never
    /// attempted or currently valid.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && (self.submission_attempts == 0 || self.is_valid())
    }
}
