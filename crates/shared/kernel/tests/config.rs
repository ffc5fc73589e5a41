use ectl_domain::media::MediaMuteState;
use ectl_kernel::config::{ConfigError, load_config, load_control_config, load_control_config_from};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_control_config_from_toml_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("surface.toml");
    fs::write(
        &path,
        r#"
            [media]
            initial = "audio"

            [inspector]
            auto_connect = true

            [logging]
            level = "debug"
        "#,
    )
    .expect("write config");

    let cfg = load_control_config(Some(&path)).expect("config should load");
    assert_eq!(cfg.media.initial, Some(MediaMuteState::AUDIO));
    assert!(cfg.inspector.auto_connect);
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.console, "unspecified fields keep their defaults");
}

#[test]
fn loads_control_config_from_json_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("surface.json");
    fs::write(&path, r#"{ "features": { "include_hidden": true } }"#).expect("write config");

    let cfg = load_control_config(Some(&path)).expect("config should load");
    assert!(cfg.features.include_hidden);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let err = load_control_config(Some(dir.path().join("absent.toml")))
        .expect_err("missing explicit file must fail");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert_eq!(err.kind(), "Config");
}

#[test]
fn malformed_values_are_reported() {
    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Strict {
        port: u16,
    }

    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("strict.toml");
    fs::write(&path, "port = \"not a number\"").expect("write config");

    let err = load_config::<Strict>(Some(&path)).expect_err("invalid port must fail");
    assert!(err.to_string().contains("Failed to deserialize config"));
}

#[test]
fn environment_overrides_file_values() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("surface.toml");
    fs::write(
        &path,
        r#"
            [inspector]
            auto_connect = false

            [features.overrides]
            http3enabled = false
        "#,
    )
    .expect("write config");

    let env = [
        ("ECTL__INSPECTOR__AUTO_CONNECT", "true"),
        ("ECTL__FEATURES__OVERRIDES__HTTP3ENABLED", "true"),
        ("UNRELATED__INSPECTOR__AUTO_CONNECT", "false"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect();

    let cfg = load_control_config_from(Some(&path), Some(env)).expect("config should load");
    assert!(cfg.inspector.auto_connect);
    assert_eq!(cfg.features.overrides.len(), 1);
    assert_eq!(cfg.features.overrides.get("http3enabled"), Some(&true));
}

#[test]
fn empty_environment_keeps_file_values() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("surface.toml");
    fs::write(&path, "[inspector]\nauto_connect = true\n").expect("write config");

    let cfg = load_control_config_from(Some(&path), Some(Default::default())).expect("config should load");
    assert!(cfg.inspector.auto_connect);
}
