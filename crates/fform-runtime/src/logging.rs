#![forbid(unsafe_code)]

//! Named, level-filtered logger handed to form consumers.
//!
//! A [`Logger`] is constructed at application start and passed to whatever
//! needs it; there is no process-wide default instance. Messages below the
//! logger's level are dropped before they reach `tracing`. Messages that
//! pass are emitted as `tracing` events under the `fform` target with a
//! `logger` field, so the installed subscriber decides where they go.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Log severity, ordered from least to most severe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// The matching `tracing` level.
    #[must_use]
    pub const fn to_tracing(self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a log level name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLogLevelError(pub String);

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: {}", self.0)
    }
}

impl std::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLogLevelError(s.to_owned()))
    }
}

/// A named logger with its own minimum level.
///
/// Clones share the name and the level.
#[derive(Clone)]
pub struct Logger {
    name: Rc<str>,
    level: Rc<Cell<LogLevel>>,
}

impl Logger {
    /// A logger at the default level ([`LogLevel::Info`]).
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self::with_level(name, LogLevel::default())
    }

    #[must_use]
    pub fn with_level(name: impl AsRef<str>, level: LogLevel) -> Self {
        Self {
            name: Rc::from(name.as_ref()),
            level: Rc::new(Cell::new(level)),
        }
    }

    /// A logger for a component of this one, e.g. `app` -> `app.form`.
    #[must_use]
    pub fn child(&self, component: &str) -> Self {
        Self::with_level(format!("{}.{component}", self.name), self.level())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level.get()
    }

    /// Change the minimum level. The change itself is logged at info,
    /// filtered by the old level.
    pub fn set_level(&self, level: LogLevel) {
        self.info(format_args!(
            "changing log level from {} to {}",
            self.level(),
            level
        ));
        self.level.set(level);
    }

    /// Whether a message at `level` passes this logger's filter.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }
        let name = &*self.name;
        match level {
            LogLevel::Debug => tracing::debug!(target: "fform", logger = name, "{message}"),
            LogLevel::Info => tracing::info!(target: "fform", logger = name, "{message}"),
            LogLevel::Warn => tracing::warn!(target: "fform", logger = name, "{message}"),
            LogLevel::Error => tracing::error!(target: "fform", logger = name, "{message}"),
        }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Default)]
    struct Captured {
        lines: Mutex<Vec<String>>,
    }

    struct CaptureLayer(Arc<Captured>);

    struct LineVisitor(String);

    impl Visit for LineVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if !self.0.is_empty() {
                self.0.push(' ');
            }
            self.0.push_str(&format!("{}={value:?}", field.name()));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            if !self.0.is_empty() {
                self.0.push(' ');
            }
            self.0.push_str(&format!("{}={value}", field.name()));
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = LineVisitor(format!("{} ", event.metadata().level()));
            event.record(&mut visitor);
            self.0.lines.lock().unwrap().push(visitor.0);
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<String> {
        let captured = Arc::new(Captured::default());
        let subscriber = tracing_subscriber::registry().with(CaptureLayer(Arc::clone(&captured)));
        tracing::subscriber::with_default(subscriber, f);
        let lines = captured.lines.lock().unwrap().clone();
        lines
    }

    #[test]
    fn level_parsing_is_case_insensitive() {
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!(" DEBUG ".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn messages_below_level_are_dropped() {
        let logger = Logger::with_level("form", LogLevel::Warn);
        let lines = capture(|| {
            logger.debug("d");
            logger.info("i");
            logger.warn("w");
            logger.error("e");
        });
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("WARN"));
        assert!(lines[0].contains("message=w"));
        assert!(lines[0].contains("logger=form"));
        assert!(lines[1].starts_with("ERROR"));
    }

    #[test]
    fn set_level_announces_change() {
        let logger = Logger::new("app");
        let lines = capture(|| {
            logger.set_level(LogLevel::Debug);
            logger.debug("now visible");
        });
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("changing log level from INFO to DEBUG"));
        assert!(lines[1].contains("now visible"));
    }

    #[test]
    fn clones_share_level() {
        let logger = Logger::new("app");
        let clone = logger.clone();
        clone.level.set(LogLevel::Error);
        assert!(!logger.enabled(LogLevel::Warn));
    }

    #[test]
    fn child_extends_name() {
        let child = Logger::with_level("app", LogLevel::Debug).child("form");
        assert_eq!(child.name(), "app.form");
        assert_eq!(child.level(), LogLevel::Debug);
    }
}
