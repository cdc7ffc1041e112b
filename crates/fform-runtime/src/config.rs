#![forbid(unsafe_code)]

//! Form behavior configuration loaded from TOML or JSON.
//!
//! Every key is optional; missing keys take the defaults below.
//!
//! ```toml
//! validate_on = ["blur", "change"]   # submit is always implied
//! error_separator = ", "
//! validating_label = "Checking..."
//! log_level = "debug"
//! ```
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `Io` | Unreadable file | Returned to caller |
//! | `Toml` / `Json` | Malformed document or unknown key | Returned to caller |
//! | `UnsupportedFormat` | Extension other than `.toml` / `.json` | Returned to caller |

use std::path::Path;

use serde::Deserialize;

use crate::form::{ValidationTrigger, ValidationTriggers};
use crate::logging::LogLevel;

/// Errors from loading a [`FormConfig`].
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    /// The file extension names no supported format.
    UnsupportedFormat(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read config: {e}"),
            Self::Toml(e) => write!(f, "invalid TOML config: {e}"),
            Self::Json(e) => write!(f, "invalid JSON config: {e}"),
            Self::UnsupportedFormat(ext) => {
                write!(f, "unsupported config format '{ext}' (expected toml or json)")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Form behavior knobs.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Extra validation triggers on top of submit.
    pub validate_on: Vec<ValidationTrigger>,
    /// Joins a field's error messages for display.
    pub error_separator: String,
    /// Shown next to a field while its validation is pending.
    pub validating_label: String,
    pub log_level: LogLevel,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            validate_on: Vec::new(),
            error_separator: ",".to_owned(),
            validating_label: "Validating...".to_owned(),
            log_level: LogLevel::Info,
        }
    }
}

impl FormConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Load from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Self::from_toml_str(&std::fs::read_to_string(path)?),
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat(ext)),
        }
    }

    /// The configured triggers as a set; submit is always included.
    #[must_use]
    pub fn triggers(&self) -> ValidationTriggers {
        self.validate_on
            .iter()
            .fold(ValidationTriggers::SUBMIT, |set, t| set | ValidationTriggers::from(*t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(FormConfig::from_toml_str("").unwrap(), FormConfig::default());
        assert_eq!(FormConfig::from_json_str("{}").unwrap(), FormConfig::default());
    }

    #[test]
    fn toml_overrides() {
        let cfg = FormConfig::from_toml_str(
            r#"
validate_on = ["blur"]
error_separator = "; "
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(cfg.error_separator, "; ");
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.validating_label, "Validating...");
        let triggers = cfg.triggers();
        assert!(triggers.contains(ValidationTriggers::SUBMIT));
        assert!(triggers.contains(ValidationTriggers::BLUR));
        assert!(!triggers.contains(ValidationTriggers::CHANGE));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = FormConfig::from_toml_str("validate_after = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn load_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("form.json");
        std::fs::File::create(&json)
            .unwrap()
            .write_all(br#"{"validate_on": ["change"], "log_level": "warn"}"#)
            .unwrap();
        let cfg = FormConfig::load(&json).unwrap();
        assert!(cfg.triggers().contains(ValidationTriggers::CHANGE));
        assert_eq!(cfg.log_level, LogLevel::Warn);

        let yaml = dir.path().join("form.yaml");
        std::fs::write(&yaml, "log_level: warn").unwrap();
        let err = FormConfig::load(&yaml).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported config format 'yaml' (expected toml or json)"
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FormConfig::load("/nonexistent/fform.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
