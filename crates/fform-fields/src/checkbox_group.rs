#![forbid(unsafe_code)]

//! Multi-choice checkbox group over a `Vec<T>` field.

use fform_codec::OptionValue;
use fform_runtime::FieldHandle;

use crate::capability::{ChoiceItem, FieldView, GroupCapable};
use crate::choices::Choices;

/// A checkbox per option; the field holds the checked values in order.
///
/// Every toggle writes the whole updated list, even when it is unchanged
/// (checking an already checked box). Checking appends, so the list keeps
/// the order the user checked things in.
#[derive(Clone, Debug)]
pub struct CheckboxGroupField<V, T: OptionValue> {
    handle: FieldHandle<V, Vec<T>>,
    choices: Choices<T>,
    label: String,
}

impl<V: Clone + PartialEq + 'static, T: OptionValue + 'static> CheckboxGroupField<V, T> {
    pub fn new(
        handle: FieldHandle<V, Vec<T>>,
        label: impl Into<String>,
        choices: Choices<T>,
    ) -> Self {
        Self {
            handle,
            choices,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> &FieldHandle<V, Vec<T>> {
        &self.handle
    }

    /// Whether the option with `key` is checked.
    #[must_use]
    pub fn is_checked(&self, key: &str) -> bool {
        self.selected_keys().iter().any(|k| k == key)
    }
}

impl<V: Clone + PartialEq + 'static, T: OptionValue + 'static> GroupCapable
    for CheckboxGroupField<V, T>
{
    fn options(&self) -> &[ChoiceItem] {
        self.choices.items()
    }

    fn selected_keys(&self) -> Vec<String> {
        self.handle
            .value()
            .iter()
            .filter_map(|v| self.choices.key_for(v))
            .collect()
    }

    fn toggle(&self, key: &str, on: bool) {
        let Some(value) = self.choices.resolve(key) else {
            tracing::warn!(
                target: "fform::fields",
                field = self.handle.name(),
                key,
                "ignoring unknown option key"
            );
            return;
        };
        let mut selected = self.handle.value();
        if !on {
            selected.retain(|v| v != &value);
        } else if !selected.contains(&value) {
            selected.push(value);
        }
        self.handle.handle_change(selected);
    }

    fn blur(&self) {
        self.handle.handle_blur();
    }
}

impl<V: Clone + PartialEq + 'static, T: OptionValue + 'static> FieldView
    for CheckboxGroupField<V, T>
{
    fn render(&self) -> String {
        let checked = self.selected_keys();
        let boxes: Vec<String> = self
            .choices
            .items()
            .iter()
            .map(|item| {
                let mark = if checked.contains(&item.key) { "[x]" } else { "[ ]" };
                format!("{mark} {}", item.label)
            })
            .collect();
        format!("{}: {}", self.label, boxes.join("  "))
    }
}
