#![forbid(unsafe_code)]

//! Named accessors for one slot of a form's value struct.

use std::fmt;

/// Name plus get/set accessors for a field of type `T` inside values `V`.
///
/// Lenses are plain function pointers, so they are `Copy` and can be
/// declared as constants next to the value struct.
pub struct FieldLens<V, T> {
    name: &'static str,
    get: fn(&V) -> &T,
    set: fn(&mut V, T),
}

impl<V, T> FieldLens<V, T> {
    pub const fn new(name: &'static str, get: fn(&V) -> &T, set: fn(&mut V, T)) -> Self {
        Self { name, get, set }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn get<'v>(&self, values: &'v V) -> &'v T {
        (self.get)(values)
    }

    pub fn set(&self, values: &mut V, value: T) {
        (self.set)(values, value);
    }
}

impl<V, T> Clone for FieldLens<V, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, T> Copy for FieldLens<V, T> {}

impl<V, T> fmt::Debug for FieldLens<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldLens").field(&self.name).finish()
    }
}

/// Declare a [`FieldLens`] for a struct field.
///
/// ```
/// use fform_runtime::field_lens;
/// use fform_runtime::form::FieldLens;
///
/// struct Profile { email: String }
/// const EMAIL: FieldLens<Profile, String> = field_lens!(Profile, email: String);
/// assert_eq!(EMAIL.name(), "email");
/// ```
#[macro_export]
macro_rules! field_lens {
    ($values:ty, $field:ident : $t:ty) => {
        $crate::form::FieldLens::<$values, $t>::new(
            stringify!($field),
            |v: &$values| &v.$field,
            |v: &mut $values, x: $t| v.$field = x,
        )
    };
    ($values:ty, $field:ident : $t:ty, $name:expr) => {
        $crate::form::FieldLens::<$values, $t>::new(
            $name,
            |v: &$values| &v.$field,
            |v: &mut $values, x: $t| v.$field = x,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Values {
        country: String,
        frequency: u8,
    }

    const COUNTRY: FieldLens<Values, String> = field_lens!(Values, country: String);
    const FREQUENCY: FieldLens<Values, u8> =
        field_lens!(Values, frequency: u8, "notificationFrequency");

    #[test]
    fn lens_reads_and_writes() {
        let mut v = Values {
            country: String::new(),
            frequency: 1,
        };
        COUNTRY.set(&mut v, "nl".into());
        assert_eq!(COUNTRY.get(&v), "nl");
        FREQUENCY.set(&mut v, 7);
        assert_eq!(*FREQUENCY.get(&v), 7);
    }

    #[test]
    fn lens_names() {
        assert_eq!(COUNTRY.name(), "country");
        assert_eq!(FREQUENCY.name(), "notificationFrequency");
        assert_eq!(format!("{COUNTRY:?}"), "FieldLens(\"country\")");
    }
}
