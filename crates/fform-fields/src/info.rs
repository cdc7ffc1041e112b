#![forbid(unsafe_code)]

//! Validation feedback shown under a field.

use fform_runtime::{FieldHandle, FieldMeta, FormApi};

use crate::capability::FieldView;

/// Display settings for [`InfoField`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoStyle {
    /// Joins multiple error messages.
    pub separator: String,
    /// Shown while validation is pending.
    pub validating_label: String,
}

impl Default for InfoStyle {
    fn default() -> Self {
        Self {
            separator: ",".to_owned(),
            validating_label: "Validating...".to_owned(),
        }
    }
}

/// Shows a field's errors once it has been touched, and a pending marker
/// while it validates. The marker appears even before the field has any
/// error, so a first slow check is visible. A stale error stays visible
/// next to the marker.
#[derive(Clone, Debug)]
pub struct InfoField<V: Clone + PartialEq + 'static> {
    form: FormApi<V>,
    name: &'static str,
    style: InfoStyle,
}

impl<V: Clone + PartialEq + 'static> InfoField<V> {
    pub fn new<T: Clone + PartialEq + 'static>(field: &FieldHandle<V, T>, style: InfoStyle) -> Self {
        Self {
            form: field.form().clone(),
            name: field.name(),
            style,
        }
    }

    fn meta(&self) -> FieldMeta {
        self.form.with_state(|s| s.field_meta(self.name))
    }

    /// Joined error text, if the field is touched and has errors.
    #[must_use]
    pub fn error_text(&self) -> Option<String> {
        let meta = self.meta();
        (meta.is_touched && meta.has_errors()).then(|| meta.joined_errors(&self.style.separator))
    }

    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.meta().is_validating
    }
}

impl<V: Clone + PartialEq + 'static> FieldView for InfoField<V> {
    fn render(&self) -> String {
        let meta = self.meta();
        let mut parts = Vec::new();
        if meta.is_validating {
            parts.push(self.style.validating_label.clone());
        }
        if meta.is_touched && meta.has_errors() {
            parts.push(meta.joined_errors(&self.style.separator));
        }
        parts.join(" ")
    }
}
