#![forbid(unsafe_code)]

//! Single-choice renderers: dropdown select and radio group.
//!
//! Both keep the field's typed value and talk to the control in string
//! keys. Keys come from [`Choices`], so `1` and `"__null__"` reach the
//! form as the number `1` and `None` rather than as text.

use fform_codec::OptionValue;
use fform_runtime::FieldHandle;

use crate::capability::{ChoiceItem, FieldView, SelectCapable};
use crate::choices::Choices;

#[derive(Clone, Debug)]
struct SingleChoice<V, T: OptionValue> {
    handle: FieldHandle<V, T>,
    choices: Choices<T>,
    label: String,
}

impl<V: Clone + PartialEq + 'static, T: OptionValue + 'static> SingleChoice<V, T> {
    fn selected_key(&self) -> Option<String> {
        self.choices.key_for(&self.handle.value())
    }

    fn select(&self, key: &str) {
        match self.choices.resolve(key) {
            Some(value) => self.handle.handle_change(value),
            None => tracing::warn!(
                target: "fform::fields",
                field = self.handle.name(),
                key,
                "ignoring unknown option key"
            ),
        }
    }

    fn selected_label(&self) -> Option<&str> {
        self.choices.label_for(&self.handle.value())
    }
}

/// A dropdown over a fixed option list.
#[derive(Clone, Debug)]
pub struct SelectField<V, T: OptionValue> {
    inner: SingleChoice<V, T>,
    placeholder: Option<String>,
    clearable: bool,
}

impl<V: Clone + PartialEq + 'static, T: OptionValue + 'static> SelectField<V, T> {
    pub fn new(handle: FieldHandle<V, T>, label: impl Into<String>, choices: Choices<T>) -> Self {
        Self {
            inner: SingleChoice {
                handle,
                choices,
                label: label.into(),
            },
            placeholder: None,
            clearable: false,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Offer a clear action that resets to the value type's cleared value.
    #[must_use]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable && T::cleared().is_some();
        self
    }

    #[must_use]
    pub fn is_clearable(&self) -> bool {
        self.clearable
    }

    /// Reset the field to its cleared value. Does nothing unless clearable.
    pub fn clear(&self) {
        if !self.clearable {
            return;
        }
        if let Some(value) = T::cleared() {
            self.inner.handle.handle_change(value);
        }
    }

    #[must_use]
    pub fn handle(&self) -> &FieldHandle<V, T> {
        &self.inner.handle
    }
}

impl<V: Clone + PartialEq + 'static, T: OptionValue + 'static> SelectCapable for SelectField<V, T> {
    fn options(&self) -> &[ChoiceItem] {
        self.inner.choices.items()
    }

    fn selected_key(&self) -> Option<String> {
        self.inner.selected_key()
    }

    fn select(&self, key: &str) {
        self.inner.select(key);
    }

    fn blur(&self) {
        self.inner.handle.handle_blur();
    }
}

impl<V: Clone + PartialEq + 'static, T: OptionValue + 'static> FieldView for SelectField<V, T> {
    fn render(&self) -> String {
        let shown = self
            .inner
            .selected_label()
            .or(self.placeholder.as_deref())
            .unwrap_or_default();
        let clear = if self.clearable { " (x)" } else { "" };
        format!("{}: <{shown}>{clear}", self.inner.label)
    }
}

/// Radio buttons over a fixed option list.
#[derive(Clone, Debug)]
pub struct RadioGroupField<V, T: OptionValue> {
    inner: SingleChoice<V, T>,
}

impl<V: Clone + PartialEq + 'static, T: OptionValue + 'static> RadioGroupField<V, T> {
    pub fn new(handle: FieldHandle<V, T>, label: impl Into<String>, choices: Choices<T>) -> Self {
        Self {
            inner: SingleChoice {
                handle,
                choices,
                label: label.into(),
            },
        }
    }

    #[must_use]
    pub fn handle(&self) -> &FieldHandle<V, T> {
        &self.inner.handle
    }
}

impl<V: Clone + PartialEq + 'static, T: OptionValue + 'static> SelectCapable
    for RadioGroupField<V, T>
{
    fn options(&self) -> &[ChoiceItem] {
        self.inner.choices.items()
    }

    fn selected_key(&self) -> Option<String> {
        self.inner.selected_key()
    }

    fn select(&self, key: &str) {
        self.inner.select(key);
    }

    fn blur(&self) {
        self.inner.handle.handle_blur();
    }
}

impl<V: Clone + PartialEq + 'static, T: OptionValue + 'static> FieldView for RadioGroupField<V, T> {
    fn render(&self) -> String {
        let selected = self.inner.selected_key();
        let buttons: Vec<String> = self
            .inner
            .choices
            .items()
            .iter()
            .map(|item| {
                let mark = if selected.as_deref() == Some(item.key.as_str()) {
                    "(o)"
                } else {
                    "( )"
                };
                format!("{mark} {}", item.label)
            })
            .collect();
        format!("{}: {}", self.inner.label, buttons.join("  "))
    }
}
