use temper::{ConfigError, EngineConfig};

#[test]
fn test_default_config() {
    let config = EngineConfig::default();
    assert!(!config.debug);
    assert!(config.prefix.is_none());
}

#[test]
fn test_parse_config() {
    let toml_str = r#"
debug = true
prefix = "app"
    "#;
    let config: EngineConfig = toml::from_str(toml_str).unwrap();
    assert!(config.debug);
    assert_eq!(config.prefix.as_deref(), Some("app"));
}

#[test]
fn test_partial_config_uses_defaults() {
    let config: EngineConfig = toml::from_str("debug = true").unwrap();
    assert!(config.debug);
    assert!(config.prefix.is_none());
}

#[test]
fn test_missing_file_is_not_found() {
    let err = EngineConfig::from_file("/nonexistent/.temper.toml").unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("temper-config-{}.toml", std::process::id()));
    std::fs::write(&path, "prefix = \"file\"\n").unwrap();

    let config = EngineConfig::from_file(&path).unwrap();
    assert_eq!(config.prefix.as_deref(), Some("file"));

    std::fs::write(&path, "debug = \"nope\"\n").unwrap();
    let err = EngineConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));

    let _ = std::fs::remove_file(&path);
}
