use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_are_english_and_light() {
    let pref = Preference::default();
    assert_eq!(pref.language, Language::En);
    assert_eq!(pref.theme, ThemeMode::Light);
}

#[test]
fn empty_stored_preference_resolves_to_defaults() {
    let stored = StoredPreference::default();
    assert!(stored.is_empty());
    assert_eq!(stored.resolve(), Preference::default());
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn language_parses_known_values() {
    assert_eq!("en".parse::<Language>().unwrap(), Language::En);
    assert_eq!(" pl ".parse::<Language>().unwrap(), Language::Pl);
}

#[test]
fn language_rejects_unknown_value() {
    let err = "de".parse::<Language>().unwrap_err();
    assert_eq!(err.axis, "language");
    assert_eq!(err.value, "de");
    assert_eq!(err.to_string(), "invalid language value: \"de\"");
}

#[test]
fn theme_mode_accepts_system_but_theme_does_not() {
    assert_eq!("system".parse::<ThemeMode>().unwrap(), ThemeMode::System);
    assert!("system".parse::<Theme>().is_err());
}

#[test]
fn parse_is_case_sensitive() {
    assert!("DARK".parse::<ThemeMode>().is_err());
    assert!("EN".parse::<Language>().is_err());
}

#[test]
fn stored_preference_drops_invalid_axis_only() {
    let stored = StoredPreference::parse(Some("xx"), Some("dark"));
    assert_eq!(stored.language, None);
    assert_eq!(stored.theme, Some(ThemeMode::Dark));
    assert_eq!(stored.resolve(), Preference::new(Language::En, ThemeMode::Dark));
}

#[test]
fn normalized_falls_back_to_defaults() {
    assert_eq!(Preference::normalized("klingon", "purple"), Preference::default());
    assert_eq!(Preference::normalized("pl", "purple"), Preference::new(Language::Pl, ThemeMode::Light));
}

// =============================================================
// Merging and resolution
// =============================================================

#[test]
fn or_prefers_self_per_axis() {
    let primary = StoredPreference { language: None, theme: Some(ThemeMode::Dark) };
    let fallback = StoredPreference { language: Some(Language::Pl), theme: Some(ThemeMode::Light) };
    let merged = primary.or(fallback);
    assert_eq!(merged.language, Some(Language::Pl));
    assert_eq!(merged.theme, Some(ThemeMode::Dark));
}

#[test]
fn system_mode_resolves_from_device_signal() {
    assert_eq!(ThemeMode::System.resolve(Theme::Dark), Theme::Dark);
    assert_eq!(ThemeMode::System.resolve(Theme::Light), Theme::Light);
    assert_eq!(ThemeMode::Dark.resolve(Theme::Light), Theme::Dark);
}

#[test]
fn toggles_are_involutions() {
    for lang in Language::ALL {
        assert_eq!(lang.toggled().toggled(), lang);
        assert_ne!(lang.toggled(), lang);
    }
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
}

#[test]
fn preference_serializes_lowercase() {
    let json = serde_json::to_string(&Preference::new(Language::Pl, ThemeMode::System)).unwrap();
    assert_eq!(json, r#"{"language":"pl","theme":"system"}"#);
}
