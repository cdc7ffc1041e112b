#![forbid(unsafe_code)]

//! Boolean renderers: switch and single checkbox.

use fform_runtime::FieldHandle;

use crate::capability::{FieldView, ToggleCapable};

macro_rules! toggle_field {
    ($(#[$doc:meta])* $name:ident, $on:literal, $off:literal) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $name<V> {
            handle: FieldHandle<V, bool>,
            label: String,
        }

        impl<V: Clone + PartialEq + 'static> $name<V> {
            pub fn new(handle: FieldHandle<V, bool>, label: impl Into<String>) -> Self {
                Self {
                    handle,
                    label: label.into(),
                }
            }

            #[must_use]
            pub fn handle(&self) -> &FieldHandle<V, bool> {
                &self.handle
            }

            /// Flip the current state.
            pub fn flip(&self) {
                self.set_on(!self.is_on());
            }
        }

        impl<V: Clone + PartialEq + 'static> ToggleCapable for $name<V> {
            fn is_on(&self) -> bool {
                self.handle.value()
            }

            fn set_on(&self, on: bool) {
                self.handle.handle_change(on);
            }

            fn blur(&self) {
                self.handle.handle_blur();
            }
        }

        impl<V: Clone + PartialEq + 'static> FieldView for $name<V> {
            fn render(&self) -> String {
                let mark = if self.is_on() { $on } else { $off };
                format!("{mark} {}", self.label)
            }
        }
    };
}

toggle_field!(
    /// An on/off switch.
    SwitchField,
    "(on )",
    "(off)"
);

toggle_field!(
    /// A single checkbox.
    CheckboxField,
    "[x]",
    "[ ]"
);

#[cfg(test)]
mod tests {
    use super::*;
    use fform_runtime::{FieldLens, FormApi, FormOptions, field_lens};

    #[derive(Clone, Debug, PartialEq, Default)]
    struct Consent {
        terms: bool,
        marketing: bool,
    }

    const TERMS: FieldLens<Consent, bool> = field_lens!(Consent, terms: bool);
    const MARKETING: FieldLens<Consent, bool> = field_lens!(Consent, marketing: bool);

    #[test]
    fn switch_flips_value() {
        let form = FormApi::new(Consent::default(), FormOptions::new());
        let switch = SwitchField::new(form.field(MARKETING), "Marketing");
        assert_eq!(switch.render(), "(off) Marketing");
        switch.flip();
        assert!(form.values().marketing);
        assert_eq!(switch.render(), "(on ) Marketing");
    }

    #[test]
    fn checkbox_sets_and_blurs() {
        let form = FormApi::new(Consent::default(), FormOptions::new());
        let checkbox = CheckboxField::new(form.field(TERMS), "I accept the terms");
        checkbox.set_on(true);
        checkbox.blur();
        assert_eq!(checkbox.render(), "[x] I accept the terms");
        let meta = checkbox.handle().meta();
        assert!(meta.is_dirty && meta.is_touched);
    }
}
