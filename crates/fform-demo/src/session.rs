#![forbid(unsafe_code)]

//! Startup plumbing and the scripted session the binary plays.

use std::env;
use std::path::PathBuf;

use fform_fields::{GroupCapable, RangeCapable, SelectCapable, TextCapable, ToggleCapable};
use fform_runtime::{ConfigError, FormConfig, LogLevel, Logger};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::app::ProfileApp;
use crate::prefs::{Language, Preferences, Theme};

/// Environment variable naming an optional TOML or JSON config file.
pub const CONFIG_ENV: &str = "FFORM_CONFIG";

/// Load the config named by [`CONFIG_ENV`], or defaults when it is unset.
pub fn load_config() -> Result<FormConfig, ConfigError> {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => FormConfig::load(PathBuf::from(path)),
        _ => Ok(FormConfig::default()),
    }
}

/// Install the fmt subscriber. `RUST_LOG` wins over `level`.
pub fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(filter)
        .try_init();
}

/// Play a fixed sequence of user actions, returning each screen.
pub fn run_script(config: &FormConfig, prefs: Preferences) -> Vec<String> {
    let logger = Logger::with_level("fform-demo", config.log_level);
    let app = ProfileApp::new(config, logger.clone(), prefs);
    let c = app.controls();
    let mut screens = vec![app.render()];

    logger.info("submitting the untouched form");
    if let Err(e) = app.submit() {
        logger.debug(format_args!("rejected: {e}"));
    }
    screens.push(app.render());

    logger.info("filling in the form");
    c.full_name.input("Ada Lovelace");
    c.full_name.blur();
    c.email.input("ada@example.com");
    c.email.blur();
    c.country.select("uk");
    c.visibility.select("friends");
    c.bio.input("Analyst of engines.");
    c.notification_types.toggle("mentions", true);
    c.notification_types.toggle("updates", true);
    c.frequency.set_position(7.0);
    c.donation.input("25.00");
    c.agree.set_on(true);
    screens.push(app.render());

    logger.info("turning email notifications off and on again");
    c.notifications.set_on(false);
    screens.push(app.render());
    c.notifications.set_on(true);

    app.prefs().theme.set_value(Theme::Dark);
    app.prefs().language.set_value(Language::Nl);

    match app.submit() {
        Ok(values) => logger.info(format_args!("accepted profile for {}", values.email)),
        Err(e) => logger.error(format_args!("unexpected rejection: {e}")),
    }
    screens.push(app.render());
    screens
}
