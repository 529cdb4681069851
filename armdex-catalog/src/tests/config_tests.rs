use std::collections::HashMap;

use super::*;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = DirectoryConfig::resolve(None, &env_from(&[])).unwrap();
    assert_eq!(config.data_url, DEFAULT_DATA_URL);
    assert_eq!(config.site_url, DEFAULT_SITE_URL);
    assert_eq!(config.timeout.as_secs(), DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.tracker.owner, DEFAULT_TRACKER_OWNER);
    assert!(config.tracker.token.is_none());
}

#[test]
fn env_beats_file() {
    let file: ConfigFile = toml::from_str(
        r#"
[catalog]
data_url = "https://file.example/apps.json"
timeout_secs = 5

[site]
url = "https://file.example/"
"#,
    )
    .unwrap();
    let env = env_from(&[(ENV_DATA_URL, "https://env.example/apps.json")]);
    let config = DirectoryConfig::resolve(Some(&file), &env).unwrap();
    assert_eq!(config.data_url, "https://env.example/apps.json");
    assert_eq!(config.site_url, "https://file.example");
    assert_eq!(config.timeout.as_secs(), 5);
}

#[test]
fn empty_env_value_is_ignored() {
    let env = env_from(&[(ENV_DATA_URL, "")]);
    let config = DirectoryConfig::resolve(None, &env).unwrap();
    assert_eq!(config.data_url, DEFAULT_DATA_URL);
}

#[test]
fn bad_timeout_is_reported() {
    let env = env_from(&[(ENV_TIMEOUT, "soon")]);
    let err = DirectoryConfig::resolve(None, &env).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == ENV_TIMEOUT));
}

#[test]
fn blank_timeout_falls_back() {
    let env = env_from(&[(ENV_TIMEOUT, "  ")]);
    let config = DirectoryConfig::resolve(None, &env).unwrap();
    assert_eq!(config.timeout.as_secs(), DEFAULT_TIMEOUT_SECS);
}

#[test]
fn zero_timeout_is_rejected() {
    let env = env_from(&[(ENV_TIMEOUT, "0")]);
    assert!(matches!(
        DirectoryConfig::resolve(None, &env),
        Err(ConfigError::InvalidValue { field: "timeout", .. })
    ));

    let file: ConfigFile = toml::from_str("[catalog]\ntimeout_secs = 0\n").unwrap();
    assert!(DirectoryConfig::resolve(Some(&file), &env_from(&[])).is_err());
}

#[test]
fn overrides_win() {
    let config = DirectoryConfig::default().with_overrides(
        Some("file:///tmp/apps.json".to_string()),
        Some("https://mirror.example/".to_string()),
    );
    assert_eq!(config.data_url, "file:///tmp/apps.json");
    assert_eq!(config.site_url, "https://mirror.example");
}

#[test]
fn save_then_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("armdex").join("config.toml");
    let mut config = DirectoryConfig::default();
    config.data_url = "https://mirror.example/apps.json".to_string();
    config.tracker.token = Some("secret".to_string());

    save_to_file(&config, &path).unwrap();
    let file = read_config_file(&path).unwrap().unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.contains("secret"));

    let reloaded = DirectoryConfig::resolve(Some(&file), &env_from(&[])).unwrap();
    assert_eq!(reloaded.data_url, "https://mirror.example/apps.json");
    assert_eq!(reloaded.site_url, DEFAULT_SITE_URL);
}

#[test]
fn missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_config_file(&dir.path().join("nope.toml")).unwrap().is_none());
}

#[test]
fn source_display() {
    assert_eq!(ConfigSource::EnvVar(ENV_DATA_URL).to_string(), "env $ARMDEX_DATA_URL");
    assert_eq!(ConfigSource::Default.to_string(), "default");
}
