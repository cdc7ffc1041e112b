#![forbid(unsafe_code)]

//! App-wide preference providers (theme, language).
//!
//! A [`Preference`] is a named observable value with a default. Views read
//! it with [`Preference::value`] and re-render through
//! [`Preference::subscribe`].

use std::env;
use std::fmt;

use crate::reactive::{Observable, Subscription};

/// A named, observable user preference.
#[derive(Clone)]
pub struct Preference<T> {
    key: &'static str,
    default: T,
    current: Observable<T>,
}

impl<T: fmt::Debug> fmt::Debug for Preference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preference")
            .field("key", &self.key)
            .field("current", &self.current)
            .finish()
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> Preference<T> {
    #[must_use]
    pub fn new(key: &'static str, default: T) -> Self {
        Self {
            key,
            current: Observable::new(default.clone()),
            default,
        }
    }

    /// Start at `initial` instead of the default, e.g. a detected value.
    #[must_use]
    pub fn with_initial(key: &'static str, default: T, initial: T) -> Self {
        Self {
            key,
            current: Observable::new(initial),
            default,
        }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub fn value(&self) -> T {
        self.current.get()
    }

    pub fn set_value(&self, value: T) {
        tracing::debug!(target: "fform::preference", key = self.key, ?value, "preference set");
        self.current.set(value);
    }

    /// Return to the default value.
    pub fn reset(&self) {
        self.set_value(self.default.clone());
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.current.subscribe(callback)
    }

    /// Number of changes so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.current.version()
    }
}

/// Pick the first language from `LC_ALL` then `LANG` that is in `supported`.
///
/// Matching ignores encoding and modifier suffixes (`nl_NL.UTF-8@euro`) and
/// falls back from a region tag to its base language (`nl-BE` -> `nl`).
/// `C` and `POSIX` mean `en`.
#[must_use]
pub fn detect_system_language(
    lc_all: Option<&str>,
    lang: Option<&str>,
    supported: &[&'static str],
) -> Option<&'static str> {
    [lc_all, lang]
        .into_iter()
        .flatten()
        .filter_map(normalize_language)
        .find_map(|tag| match_supported(&tag, supported))
}

/// [`detect_system_language`] against the process environment.
#[must_use]
pub fn system_language(supported: &[&'static str]) -> Option<&'static str> {
    let lc_all = env::var("LC_ALL").ok();
    let lang = env::var("LANG").ok();
    detect_system_language(lc_all.as_deref(), lang.as_deref(), supported)
}

fn normalize_language(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw).trim();
    if raw.is_empty() {
        return None;
    }
    if raw.eq_ignore_ascii_case("c") || raw.eq_ignore_ascii_case("posix") {
        return Some("en".to_owned());
    }
    Some(raw.replace('_', "-"))
}

fn match_supported(tag: &str, supported: &[&'static str]) -> Option<&'static str> {
    let exact = supported.iter().find(|s| s.eq_ignore_ascii_case(tag));
    let base = tag.split('-').next().unwrap_or(tag);
    exact
        .or_else(|| supported.iter().find(|s| s.eq_ignore_ascii_case(base)))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const SUPPORTED: &[&str] = &["en", "nl"];

    #[test]
    fn lc_all_wins_over_lang() {
        assert_eq!(
            detect_system_language(Some("nl_NL.UTF-8"), Some("en_US.UTF-8"), SUPPORTED),
            Some("nl")
        );
    }

    #[test]
    fn unsupported_lc_all_falls_through_to_lang() {
        assert_eq!(
            detect_system_language(Some("fr_FR.UTF-8"), Some("nl_BE@euro"), SUPPORTED),
            Some("nl")
        );
    }

    #[test]
    fn posix_locale_means_english() {
        assert_eq!(detect_system_language(Some("C"), None, SUPPORTED), Some("en"));
        assert_eq!(detect_system_language(None, Some("POSIX"), SUPPORTED), Some("en"));
    }

    #[test]
    fn nothing_usable_is_none() {
        assert_eq!(detect_system_language(None, None, SUPPORTED), None);
        assert_eq!(detect_system_language(Some(""), Some("de_DE"), SUPPORTED), None);
    }

    #[test]
    fn exact_region_match_is_preferred() {
        assert_eq!(
            detect_system_language(None, Some("pt_BR.UTF-8"), &["pt", "pt-BR"]),
            Some("pt-BR")
        );
    }

    #[test]
    fn preference_notifies_and_resets() {
        let theme = Preference::new("theme", "system");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _sub = theme.subscribe(move |t| s.borrow_mut().push(*t));

        theme.set_value("dark");
        theme.set_value("dark");
        theme.reset();
        assert_eq!(*seen.borrow(), vec!["dark", "system"]);
        assert_eq!(theme.value(), "system");
        assert_eq!(theme.version(), 2);
        assert_eq!(theme.key(), "theme");
    }
}
