use super::*;

// =============================================================================
// RENDER POLICY
// =============================================================================

#[test]
fn policy_defaults_to_local_first_without_secure_cookies() {
    let policy = RenderPolicy::default();
    assert_eq!(policy.precedence, Precedence::LocalFirst);
    assert_eq!(policy.secure_meta(), "false");
}

#[test]
fn policy_round_trips_through_meta_strings() {
    let policy = RenderPolicy { precedence: Precedence::CookieFirst, secure_cookies: true };
    let restored = RenderPolicy::from_meta(Some(policy.precedence.as_str()), Some(policy.secure_meta()));
    assert_eq!(restored, policy);
}

#[test]
fn policy_from_missing_or_garbled_meta_is_default() {
    assert_eq!(RenderPolicy::from_meta(None, None), RenderPolicy::default());
    assert_eq!(RenderPolicy::from_meta(Some("newest-wins"), Some("yes")), RenderPolicy::default());
}

// =============================================================================
// TOGGLES
// =============================================================================

#[test]
fn language_toggle_keeps_theme() {
    let dark = Presentation { theme: Theme::Dark, mode: ThemeMode::Dark, ..Presentation::default() };
    let next = with_language_toggled(dark);
    assert_eq!(next.language, Language::Pl);
    assert_eq!(next.theme, Theme::Dark);
    assert_eq!(with_language_toggled(next).language, Language::En);
}

#[test]
fn theme_toggle_from_system_becomes_explicit() {
    let system_dark = Presentation { theme: Theme::Dark, mode: ThemeMode::System, ..Presentation::default() };
    let next = with_theme_toggled(system_dark);
    assert_eq!(next.theme, Theme::Light);
    assert_eq!(next.mode, ThemeMode::Light);
}

#[test]
fn theme_toggle_twice_restores_explicit_theme() {
    let light = Presentation::default();
    assert_eq!(with_theme_toggled(with_theme_toggled(light)), light);
}
