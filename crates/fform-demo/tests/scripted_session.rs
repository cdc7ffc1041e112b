use fform_demo::session::run_script;
use fform_demo::{Language, Preferences, Theme};
use fform_runtime::FormConfig;

fn prefs() -> Preferences {
    Preferences::new(Theme::Light, Language::En)
}

#[test]
fn script_walks_from_errors_to_preview() {
    let screens = run_script(&FormConfig::default(), prefs());
    assert_eq!(screens.len(), 5);

    assert!(screens[0].starts_with("Form Example  [theme: light  language: en]"));
    assert!(screens[0].contains("Submit the form to see the result here"));
    assert!(!screens[0].contains('!'));

    assert!(screens[1].contains("! Full name is required"));
    assert!(screens[1].contains("! Country selection is required"));

    assert!(screens[2].contains("Country: <United Kingdom> (x)"));
    assert!(screens[2].contains("(o) Friends"));
    assert!(screens[2].contains("[x] Mentions"));
    assert!(!screens[2].contains('!'));

    assert!(!screens[3].contains("Notification Types"));

    let last = &screens[4];
    assert!(last.starts_with("Form Example  [theme: dark  language: nl]"));
    assert!(last.contains("\"email\": \"ada@example.com\""));
    assert!(last.contains("\"notificationFrequency\": 7"));
    assert!(last.contains("\"agreeToTerms\": true"));
    assert!(last.contains("Full Name: []"));
}

#[test]
fn config_file_changes_error_separator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fform.toml");
    std::fs::write(&path, "error_separator = \" / \"\nlog_level = \"warn\"\n").unwrap();
    let config = FormConfig::load(&path).unwrap();

    let screens = run_script(&config, prefs());
    assert!(screens[1].contains("! Email is required / Invalid email address"));
}
