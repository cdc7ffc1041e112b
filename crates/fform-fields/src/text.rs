#![forbid(unsafe_code)]

//! Single-line text input.

use fform_runtime::FieldHandle;

use crate::capability::{FieldView, TextCapable};

/// A text input bound to a `String` field.
#[derive(Clone, Debug)]
pub struct TextField<V> {
    handle: FieldHandle<V, String>,
    label: String,
    placeholder: Option<String>,
}

impl<V: Clone + PartialEq + 'static> TextField<V> {
    pub fn new(handle: FieldHandle<V, String>, label: impl Into<String>) -> Self {
        Self {
            handle,
            label: label.into(),
            placeholder: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn handle(&self) -> &FieldHandle<V, String> {
        &self.handle
    }
}

impl<V: Clone + PartialEq + 'static> TextCapable for TextField<V> {
    fn text(&self) -> String {
        self.handle.value()
    }

    fn input(&self, text: &str) {
        self.handle.handle_change(text.to_owned());
    }

    fn blur(&self) {
        self.handle.handle_blur();
    }
}

impl<V: Clone + PartialEq + 'static> FieldView for TextField<V> {
    fn render(&self) -> String {
        let text = self.text();
        match (&self.placeholder, text.is_empty()) {
            (Some(p), true) => format!("{}: [{p}]", self.label),
            _ => format!("{}: [{text}]", self.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fform_runtime::{FieldLens, FormApi, FormOptions, field_lens};

    #[derive(Clone, Debug, PartialEq, Default)]
    struct Contact {
        email: String,
    }

    const EMAIL: FieldLens<Contact, String> = field_lens!(Contact, email: String);

    #[test]
    fn input_writes_and_renders() {
        let form = FormApi::new(Contact::default(), FormOptions::new());
        let field = TextField::new(form.field(EMAIL), "Email").placeholder("you@example.com");
        assert_eq!(field.render(), "Email: [you@example.com]");

        field.input("ada@example.com");
        field.blur();
        assert_eq!(field.text(), "ada@example.com");
        assert_eq!(field.render(), "Email: [ada@example.com]");
        assert!(field.handle().meta().is_touched);
    }
}
