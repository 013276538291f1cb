use super::*;

#[test]
fn default_matches_stock_markup() {
    let cfg = ThemeConfig::default();
    assert_eq!(cfg.storage_key, "darkMode");
    assert_eq!(cfg.dark_class, "dark-mode");
    assert_eq!(cfg.indicator_id, "darkBtn");
    assert_eq!(cfg.dark_glyph, "☀️");
    assert_eq!(cfg.light_glyph, "🌙");
    assert_eq!(cfg.root, ThemeRoot::Body);
    assert!(cfg.validate().is_ok());
}

#[test]
fn glyph_follows_mode() {
    let cfg = ThemeConfig::default();
    assert_eq!(cfg.glyph(ThemeMode::Dark), "☀️");
    assert_eq!(cfg.glyph(ThemeMode::Light), "🌙");
}

#[test]
fn from_json_empty_object_yields_defaults() {
    let cfg = ThemeConfig::from_json("{}").unwrap();
    assert_eq!(cfg, ThemeConfig::default());
}

#[test]
fn from_json_applies_partial_overrides() {
    let cfg = ThemeConfig::from_json(r#"{"storage_key":"theme","root":"html","light_glyph":"☾"}"#).unwrap();
    assert_eq!(cfg.storage_key, "theme");
    assert_eq!(cfg.root, ThemeRoot::Html);
    assert_eq!(cfg.light_glyph, "☾");
    assert_eq!(cfg.dark_class, DEFAULT_DARK_CLASS);
    assert_eq!(cfg.indicator_id, DEFAULT_INDICATOR_ID);
    assert_eq!(cfg.dark_glyph, DEFAULT_DARK_GLYPH);
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = ThemeConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}

#[test]
fn from_json_rejects_unknown_keys() {
    let err = ThemeConfig::from_json(r#"{"storageKey":"x"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}

#[test]
fn from_json_rejects_unknown_root() {
    let err = ThemeConfig::from_json(r#"{"root":"main"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}

#[test]
fn validate_rejects_empty_identifiers() {
    for field in ["storage_key", "dark_class", "indicator_id"] {
        let raw = format!(r#"{{"{field}":"  "}}"#);
        let err = ThemeConfig::from_json(&raw).unwrap_err();
        assert_eq!(err, ThemeError::Config(format!("{field} must not be empty")));
    }
}

#[test]
fn validate_rejects_multi_token_class() {
    let cfg = ThemeConfig { dark_class: "dark mode".into(), ..ThemeConfig::default() };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("single class token"));
}

#[test]
fn validate_allows_empty_glyphs() {
    let cfg = ThemeConfig { dark_glyph: String::new(), light_glyph: String::new(), ..ThemeConfig::default() };
    assert!(cfg.validate().is_ok());
}

#[test]
fn wire_click_defaults_on() {
    assert!(ThemeConfig::default().wire_click);
    assert!(ThemeConfig::from_json("{}").unwrap().wire_click);
}

#[test]
fn from_json_can_disable_wire_click() {
    let cfg = ThemeConfig::from_json(r#"{"wire_click":false}"#).unwrap();
    assert!(!cfg.wire_click);
    assert_eq!(cfg.indicator_id, DEFAULT_INDICATOR_ID);
}

#[test]
fn from_json_rejects_non_boolean_wire_click() {
    let err = ThemeConfig::from_json(r#"{"wire_click":"no"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}
