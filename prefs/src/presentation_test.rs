use super::*;
use crate::test_support::MemoryRoot;

#[test]
fn presentation_resolves_system_mode() {
    let pref = Preference::new(Language::Pl, ThemeMode::System);
    let p = Presentation::of(pref, Theme::Dark);
    assert_eq!(p.theme, Theme::Dark);
    assert_eq!(p.mode, ThemeMode::System);
    assert_eq!(p.preference(), pref);
}

#[test]
fn class_and_style_follow_concrete_theme() {
    let p = Presentation::of(Preference::new(Language::En, ThemeMode::Dark), Theme::Light);
    assert_eq!(p.class_token(), "dark-mode");
    assert_eq!(p.color_scheme(), "dark");
    assert_eq!(p.style_attr(), "color-scheme: dark");
}

#[test]
fn apply_writes_every_root_attribute() {
    let mut root = MemoryRoot::default();
    root.classes.insert("light-mode".into());
    root.classes.insert("app".into());

    let p = Presentation::of(Preference::new(Language::Pl, ThemeMode::Dark), Theme::Light);
    apply(&mut root, &p);

    assert_eq!(root.attribute(LANG_ATTR).as_deref(), Some("pl"));
    assert_eq!(root.attribute(THEME_ATTR).as_deref(), Some("dark"));
    assert_eq!(root.attribute(THEME_MODE_ATTR).as_deref(), Some("dark"));
    assert!(root.classes.contains("dark-mode"));
    assert!(!root.classes.contains("light-mode"));
    assert!(root.classes.contains("app"));
    assert_eq!(root.style.get(COLOR_SCHEME_PROPERTY).map(String::as_str), Some("dark"));
}

#[test]
fn read_rendered_round_trips_apply() {
    let mut root = MemoryRoot::default();
    let p = Presentation::of(Preference::new(Language::Pl, ThemeMode::System), Theme::Dark);
    apply(&mut root, &p);
    assert_eq!(read_rendered(&root), p);
}

#[test]
fn read_rendered_defaults_when_attributes_missing() {
    assert_eq!(read_rendered(&MemoryRoot::default()), Presentation::default());
}

#[test]
fn read_rendered_uses_concrete_theme_when_mode_missing() {
    let root = MemoryRoot::default().with_attr(LANG_ATTR, "pl").with_attr(THEME_ATTR, "dark");
    let p = read_rendered(&root);
    assert_eq!(p.language, Language::Pl);
    assert_eq!(p.theme, Theme::Dark);
    assert_eq!(p.mode, ThemeMode::Dark);
}

#[test]
fn read_rendered_ignores_garbage() {
    let root = MemoryRoot::default().with_attr(LANG_ATTR, "en-US").with_attr(THEME_ATTR, "sepia");
    assert_eq!(read_rendered(&root), Presentation::default());
}
