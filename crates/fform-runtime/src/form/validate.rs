#![forbid(unsafe_code)]

//! The validation contract the form store consumes.
//!
//! A [`Validator`] maps form values to [`FieldErrors`]. The store never
//! interprets messages; it copies them into each field's meta unchanged.

use std::collections::BTreeMap;
use std::fmt;

/// When validation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum ValidationTrigger {
    Submit,
    Blur,
    Change,
}

impl ValidationTrigger {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Blur => "blur",
            Self::Change => "change",
        }
    }
}

impl fmt::Display for ValidationTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags::bitflags! {
    /// Set of triggers a form validates on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ValidationTriggers: u8 {
        const SUBMIT = 1 << 0;
        const BLUR = 1 << 1;
        const CHANGE = 1 << 2;
    }
}

impl Default for ValidationTriggers {
    fn default() -> Self {
        Self::SUBMIT
    }
}

impl From<ValidationTrigger> for ValidationTriggers {
    fn from(trigger: ValidationTrigger) -> Self {
        match trigger {
            ValidationTrigger::Submit => Self::SUBMIT,
            ValidationTrigger::Blur => Self::BLUR,
            ValidationTrigger::Change => Self::CHANGE,
        }
    }
}

/// Error messages per field name. Field order is by name; message order is
/// the order the validator reported them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    by_field: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message for `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.by_field
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Messages for `field`, empty if none.
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.by_field.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether no field has a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_field.values().all(Vec::is_empty)
    }

    /// Number of fields with at least one message.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.by_field.values().filter(|m| !m.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.by_field
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(k, m)| (k.as_str(), m.as_slice()))
    }

    /// Names of fields with messages.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(k, _)| k)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, messages)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

impl<K: Into<String>, M: Into<String>> FromIterator<(K, M)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (K, M)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.push(field, message);
        }
        errors
    }
}

/// Produces field errors for a set of form values.
pub trait Validator<V> {
    fn validate(&self, values: &V, trigger: ValidationTrigger) -> FieldErrors;
}

impl<V, F> Validator<V> for F
where
    F: Fn(&V) -> FieldErrors,
{
    fn validate(&self, values: &V, _trigger: ValidationTrigger) -> FieldErrors {
        self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_message_order() {
        let mut errors = FieldErrors::new();
        errors.push("email", "Email is required");
        errors.push("email", "Invalid email address");
        assert_eq!(errors.get("email"), ["Email is required", "Invalid email address"]);
        assert!(errors.get("name").is_empty());
    }

    #[test]
    fn display_lists_fields_by_name() {
        let errors: FieldErrors = [("b", "two"), ("a", "one")].into_iter().collect();
        assert_eq!(errors.to_string(), "a: one; b: two");
        assert_eq!(errors.field_count(), 2);
    }

    #[test]
    fn closures_are_validators() {
        let v = |n: &i32| {
            let mut e = FieldErrors::new();
            if *n < 0 {
                e.push("n", "negative");
            }
            e
        };
        assert!(v.validate(&1, ValidationTrigger::Change).is_empty());
        assert_eq!(v.validate(&-1, ValidationTrigger::Submit).get("n"), ["negative"]);
    }

    #[test]
    fn triggers_convert_to_flags() {
        let set = ValidationTriggers::SUBMIT | ValidationTriggers::from(ValidationTrigger::Blur);
        assert!(set.contains(ValidationTriggers::BLUR));
        assert!(!set.contains(ValidationTriggers::CHANGE));
        assert_eq!(ValidationTriggers::default(), ValidationTriggers::SUBMIT);
    }
}
