use super::*;

#[test]
fn parse_accepts_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(" dark "), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn toggled_alternates() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn icon_points_at_the_other_theme() {
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
}

// =============================================================
// resolve_initial
// =============================================================

#[test]
fn attribute_wins_over_storage_and_system() {
    assert_eq!(resolve_initial(Some("light"), Some("dark"), true), Theme::Light);
}

#[test]
fn stored_preference_wins_over_system() {
    assert_eq!(resolve_initial(None, Some("light"), true), Theme::Light);
    assert_eq!(resolve_initial(None, Some("dark"), false), Theme::Dark);
}

#[test]
fn system_preference_is_the_fallback() {
    assert_eq!(resolve_initial(None, None, true), Theme::Dark);
    assert_eq!(resolve_initial(None, None, false), Theme::Light);
}

#[test]
fn garbage_stored_value_falls_through_to_system() {
    assert_eq!(resolve_initial(None, Some("neon"), true), Theme::Dark);
    assert_eq!(resolve_initial(Some("  "), Some("neon"), true), Theme::Dark);
}

#[test]
fn unrecognised_attribute_still_counts_as_declared() {
    assert_eq!(resolve_initial(Some("auto"), Some("dark"), true), Theme::Light);
}

// =============================================================
// declared_theme
// =============================================================

#[test]
fn declared_theme_ignores_absent_and_blank_attributes() {
    assert_eq!(declared_theme(None), None);
    assert_eq!(declared_theme(Some("")), None);
    assert_eq!(declared_theme(Some(" ")), None);
}

#[test]
fn declared_theme_reads_anything_but_dark_as_light() {
    assert_eq!(declared_theme(Some("dark")), Some(Theme::Dark));
    assert_eq!(declared_theme(Some("light")), Some(Theme::Light));
    assert_eq!(declared_theme(Some("auto")), Some(Theme::Light));
}
