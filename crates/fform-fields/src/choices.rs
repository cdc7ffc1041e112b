#![forbid(unsafe_code)]

//! Option lists shared by the selection renderers.

use std::rc::Rc;

use fform_codec::{
    OptionValue, SelectOption, ValueMaps, build_value_maps_from_options, decode_value,
    encode_value,
};

use crate::capability::ChoiceItem;

/// An option list with its control keys and lookup tables.
///
/// Built once per option set; cloning shares the tables.
#[derive(Clone, Debug)]
pub struct Choices<T: OptionValue> {
    inner: Rc<ChoicesInner<T>>,
}

#[derive(Debug)]
struct ChoicesInner<T: OptionValue> {
    options: Vec<SelectOption<T>>,
    items: Vec<ChoiceItem>,
    maps: ValueMaps<T>,
}

impl<T: OptionValue> Choices<T> {
    pub fn new(options: impl IntoIterator<Item = SelectOption<T>>) -> Self {
        let options: Vec<_> = options.into_iter().collect();
        let maps = build_value_maps_from_options(&options);
        let items = options
            .iter()
            .map(|o| ChoiceItem {
                key: maps
                    .encode(&o.value)
                    .map_or_else(|| encode_value(&o.value), str::to_owned),
                label: o.label.clone(),
            })
            .collect();
        Self {
            inner: Rc::new(ChoicesInner {
                options,
                items,
                maps,
            }),
        }
    }

    #[must_use]
    pub fn options(&self) -> &[SelectOption<T>] {
        &self.inner.options
    }

    #[must_use]
    pub fn items(&self) -> &[ChoiceItem] {
        &self.inner.items
    }

    #[must_use]
    pub fn maps(&self) -> &ValueMaps<T> {
        &self.inner.maps
    }

    /// Key for `value` if it is one of the options.
    #[must_use]
    pub fn key_for(&self, value: &T) -> Option<String> {
        self.inner.maps.encode(value).map(str::to_owned)
    }

    /// The option value behind `key`.
    ///
    /// Keys that are not spelled exactly as built (`"2.0"` for `2`) are
    /// decoded and accepted if the value is one of the options.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<T> {
        if let Some(value) = self.inner.maps.decode(key) {
            return Some(value.clone());
        }
        decode_value::<T>(key).filter(|v| self.inner.maps.encode(v).is_some())
    }

    /// Label of the option whose value is `value`.
    #[must_use]
    pub fn label_for(&self, value: &T) -> Option<&str> {
        self.inner
            .options
            .iter()
            .find(|o| &o.value == value)
            .map(|o| o.label.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.options.is_empty()
    }
}

impl<T: OptionValue> FromIterator<SelectOption<T>> for Choices<T> {
    fn from_iter<I: IntoIterator<Item = SelectOption<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers() -> Choices<i64> {
        Choices::new([SelectOption::new(1, "One"), SelectOption::new(2, "Two")])
    }

    #[test]
    fn items_carry_encoded_keys_in_order() {
        let c = numbers();
        let keys: Vec<_> = c.items().iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, ["1", "2"]);
        assert_eq!(c.items()[1].label, "Two");
    }

    #[test]
    fn resolve_accepts_alternate_numeral_spelling() {
        let c = numbers();
        assert_eq!(c.resolve("2"), Some(2));
        assert_eq!(c.resolve("2.0"), Some(2));
        assert_eq!(c.resolve("3"), None);
        assert_eq!(c.resolve("Two"), None);
    }

    #[test]
    fn optional_values_use_markers() {
        let c: Choices<Option<String>> = [
            SelectOption::new(None, "None"),
            SelectOption::new(Some("nl".to_owned()), "Netherlands"),
        ]
        .into_iter()
        .collect();
        assert_eq!(c.items()[0].key, "__null__");
        assert_eq!(c.resolve("__null__"), Some(None));
        assert_eq!(c.label_for(&Some("nl".into())), Some("Netherlands"));
    }
}
