use super::*;

// =============================================================
// Flag decoding
// =============================================================

#[test]
fn from_flag_one_is_dark() {
    assert_eq!(ThemeMode::from_flag(Some("1")), ThemeMode::Dark);
}

#[test]
fn from_flag_zero_is_light() {
    assert_eq!(ThemeMode::from_flag(Some("0")), ThemeMode::Light);
}

#[test]
fn from_flag_absent_is_light() {
    assert_eq!(ThemeMode::from_flag(None), ThemeMode::Light);
}

#[test]
fn from_flag_malformed_values_are_light() {
    for raw in ["", "true", "yes", "dark", " 1", "1 ", "01", "2"] {
        assert_eq!(ThemeMode::from_flag(Some(raw)), ThemeMode::Light, "raw = {raw:?}");
    }
}

// =============================================================
// Encoding and inversion
// =============================================================

#[test]
fn flag_encodes_one_and_zero() {
    assert_eq!(ThemeMode::Dark.flag(), "1");
    assert_eq!(ThemeMode::Light.flag(), "0");
}

#[test]
fn default_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
    assert!(!ThemeMode::default().is_dark());
}

#[test]
fn from_dark_maps_boolean() {
    assert_eq!(ThemeMode::from_dark(true), ThemeMode::Dark);
    assert_eq!(ThemeMode::from_dark(false), ThemeMode::Light);
}

#[test]
fn toggled_inverts_and_returns() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
}

#[test]
fn written_flag_reads_back_as_same_mode() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(ThemeMode::from_flag(Some(mode.flag())), mode);
    }
}
