use super::*;

#[test]
fn every_label_has_text_in_both_languages() {
    for label in Label::ALL {
        assert!(!t(Language::En, label).is_empty(), "{label:?} missing in en");
        assert!(!t(Language::Pl, label).is_empty(), "{label:?} missing in pl");
    }
}

#[test]
fn navigation_is_translated() {
    assert_eq!(t(Language::En, Label::NavProjects), "Projects");
    assert_eq!(t(Language::Pl, Label::NavProjects), "Projekty");
}

#[test]
fn language_switch_is_labelled_in_the_target_language() {
    assert_eq!(t(Language::En, Label::SwitchLanguage), "Przełącz na polski");
    assert_eq!(t(Language::Pl, Label::SwitchLanguage), "Switch to English");
}
