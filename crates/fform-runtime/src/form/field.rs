#![forbid(unsafe_code)]

//! Per-field handles given to renderers.

use std::fmt;

use crate::form::api::FormApi;
use crate::form::lens::FieldLens;
use crate::form::state::{FieldMeta, FieldState};
use crate::reactive::{Binding, Selection};

/// A renderer's view of one field: read its state, write its value.
pub struct FieldHandle<V, T> {
    form: FormApi<V>,
    lens: FieldLens<V, T>,
}

impl<V, T> Clone for FieldHandle<V, T> {
    fn clone(&self) -> Self {
        Self {
            form: self.form.clone(),
            lens: self.lens,
        }
    }
}

impl<V, T> fmt::Debug for FieldHandle<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldHandle")
            .field("name", &self.lens.name())
            .finish_non_exhaustive()
    }
}

impl<V: Clone + PartialEq + 'static, T: Clone + PartialEq + 'static> FieldHandle<V, T> {
    pub(crate) fn new(form: FormApi<V>, lens: FieldLens<V, T>) -> Self {
        Self { form, lens }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.lens.name()
    }

    #[must_use]
    pub fn lens(&self) -> FieldLens<V, T> {
        self.lens
    }

    /// The owning form.
    #[must_use]
    pub fn form(&self) -> &FormApi<V> {
        &self.form
    }

    /// Current value and meta.
    #[must_use]
    pub fn state(&self) -> FieldState<T> {
        let lens = self.lens;
        self.form.with_state(|s| FieldState {
            value: lens.get(&s.values).clone(),
            meta: s.field_meta(lens.name()),
        })
    }

    #[must_use]
    pub fn value(&self) -> T {
        let lens = self.lens;
        self.form.with_state(|s| lens.get(&s.values).clone())
    }

    #[must_use]
    pub fn meta(&self) -> FieldMeta {
        self.form.with_state(|s| s.field_meta(self.lens.name()))
    }

    /// Write a new value into the form.
    pub fn handle_change(&self, value: T) {
        self.form.set_field_value(self.lens, value);
    }

    /// Report that the field lost focus.
    pub fn handle_blur(&self) {
        self.form.blur_field(self.lens.name());
    }

    /// Notified whenever this field's value or meta changes.
    pub fn subscribe(&self, on_change: impl Fn(&FieldState<T>) + 'static) -> Selection<FieldState<T>> {
        let lens = self.lens;
        self.form.select(
            move |s| FieldState {
                value: lens.get(&s.values).clone(),
                meta: s.field_meta(lens.name()),
            },
            on_change,
        )
    }

    /// A read binding to the field value.
    pub fn bind_value(&self) -> Binding<T> {
        let form = self.form.clone();
        let lens = self.lens;
        Binding::new(move || form.with_state(|s| lens.get(&s.values).clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_lens;
    use crate::form::FormOptions;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    struct Prefs {
        theme: String,
        volume: u8,
    }

    const THEME: FieldLens<Prefs, String> = field_lens!(Prefs, theme: String);
    const VOLUME: FieldLens<Prefs, u8> = field_lens!(Prefs, volume: u8);

    fn form() -> FormApi<Prefs> {
        FormApi::new(
            Prefs {
                theme: "light".into(),
                volume: 5,
            },
            FormOptions::new(),
        )
    }

    #[test]
    fn handle_change_writes_through() {
        let form = form();
        let theme = form.field(THEME);
        theme.handle_change("dark".into());
        assert_eq!(theme.value(), "dark");
        assert_eq!(form.values().theme, "dark");
        assert!(theme.meta().is_dirty);
    }

    #[test]
    fn field_subscription_ignores_other_fields() {
        let form = form();
        let theme = form.field(THEME);
        let volume = form.field(VOLUME);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _sel = theme.subscribe(move |st| s.borrow_mut().push(st.value.clone()));

        volume.handle_change(9);
        theme.handle_change("dark".into());
        assert_eq!(*seen.borrow(), vec!["dark".to_owned()]);
    }

    #[test]
    fn blur_sets_touched() {
        let form = form();
        let theme = form.field(THEME);
        theme.handle_blur();
        let st = theme.state();
        assert!(st.meta.is_touched);
        assert_eq!(st.value, "light");
    }

    #[test]
    fn bound_value_tracks_form() {
        let form = form();
        let volume = form.field(VOLUME);
        let b = volume.bind_value();
        form.set_field_value(VOLUME, 1);
        assert_eq!(b.get(), 1);
        form.reset();
        assert_eq!(b.get(), 5);
    }
}
