//! Configuration tests
//!
//! Round-trips guard the template: every field written by `to_toml()` must
//! parse back through `FileConfig` and resolve to the same value.

use super::*;
use std::collections::HashMap;
use std::io::Write;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let parsed: FileConfig = toml::from_str(&config.to_toml()).expect("default template parses");
    assert_eq!(Config::resolve(parsed, no_env), config);
}

#[test]
fn test_config_roundtrip_custom() {
    let config = Config {
        api_url: "http://localhost:8080".to_string(),
        dark_mode: true,
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_enabled: true,
            file_dir: PathBuf::from("/var/log/noc"),
            file_rotation: LogRotation::Hourly,
            file_prefix: "noc-test".to_string(),
        },
    };
    let parsed: FileConfig = toml::from_str(&config.to_toml()).expect("custom template parses");
    assert_eq!(Config::resolve(parsed, no_env), config);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let parsed: FileConfig = toml::from_str("").unwrap();
    assert_eq!(Config::resolve(parsed, no_env), Config::default());
}

#[test]
fn test_env_overrides_file() {
    let parsed: FileConfig = toml::from_str(
        r#"
api_url = "http://from-file"
dark_mode = false
"#,
    )
    .unwrap();
    let env = env_from(&[(ENV_API_URL, "http://from-env"), (ENV_DARK_MODE, "true")]);
    let config = Config::resolve(parsed, env);
    assert_eq!(config.api_url, "http://from-env");
    assert!(config.dark_mode);
}

#[test]
fn test_unparseable_env_flag_falls_through() {
    let parsed: FileConfig = toml::from_str("dark_mode = true").unwrap();
    let config = Config::resolve(parsed, env_from(&[(ENV_DARK_MODE, "maybe")]));
    assert!(config.dark_mode);
}

#[test]
fn test_blank_env_url_ignored() {
    let parsed: FileConfig = toml::from_str("").unwrap();
    let config = Config::resolve(parsed, env_from(&[(ENV_API_URL, "  ")]));
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[test]
fn test_partial_logging_section() {
    let parsed: FileConfig = toml::from_str(
        r#"
[logging]
level = "warn"
file_rotation = "NEVER"
"#,
    )
    .unwrap();
    let logging = Config::resolve(parsed, no_env).logging;
    assert_eq!(logging.level, "warn");
    assert_eq!(logging.file_rotation, LogRotation::Never);
    assert_eq!(logging.file_prefix, "noc");
    assert!(!logging.file_enabled);
}

#[test]
fn test_unknown_rotation_defaults_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("Hourly"), LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// File reading
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_file_is_empty_config() {
    let path = std::env::temp_dir().join(format!("noc-missing-{}.toml", std::process::id()));
    let file = Config::read_file_config(&path).unwrap();
    assert!(file.api_url.is_none());
    assert!(file.logging.is_none());
}

#[test]
fn test_malformed_file_is_an_error() {
    let path = std::env::temp_dir().join(format!("noc-bad-{}.toml", std::process::id()));
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "dark_mode = not-a-bool").unwrap();
    drop(f);

    let err = Config::read_file_config(&path).err().expect("should fail");
    let _ = std::fs::remove_file(&path);
    assert!(err.to_string().contains("Failed to parse"));
}
