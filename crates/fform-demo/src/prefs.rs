#![forbid(unsafe_code)]

//! Theme and language preferences for the demo shell.

use std::fmt;

use fform_runtime::{Preference, system_language};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Nl,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Nl];
    pub const CODES: [&'static str; 2] = ["en", "nl"];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Nl => "nl",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Nl => "Nederlands",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The shell's preference providers.
#[derive(Clone, Debug)]
pub struct Preferences {
    pub theme: Preference<Theme>,
    pub language: Preference<Language>,
}

impl Preferences {
    #[must_use]
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            theme: Preference::with_initial("theme", Theme::default(), theme),
            language: Preference::with_initial("language", Language::default(), language),
        }
    }

    /// System theme, and the environment's language when it is supported.
    #[must_use]
    pub fn detect() -> Self {
        let language = system_language(&Language::CODES)
            .and_then(Language::from_code)
            .unwrap_or_default();
        Self::new(Theme::System, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_match_variants() {
        for (lang, code) in Language::ALL.into_iter().zip(Language::CODES) {
            assert_eq!(lang.code(), code);
            assert_eq!(Language::from_code(code), Some(lang));
        }
        assert_eq!(Language::Nl.name(), "Nederlands");
    }

    #[test]
    fn preferences_reset_to_defaults() {
        let prefs = Preferences::new(Theme::Dark, Language::Nl);
        assert_eq!(prefs.theme.value(), Theme::Dark);
        prefs.theme.reset();
        prefs.language.reset();
        assert_eq!(prefs.theme.value(), Theme::System);
        assert_eq!(prefs.language.value(), Language::En);
    }
}
