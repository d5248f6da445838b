use holdem_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::fs;

const ENV_KEYS: &[&str] = &[
    "HOLDEM_CONFIG",
    "HOLDEM_SEED",
    "HOLDEM_SMALL_BLIND",
    "HOLDEM_BIG_BLIND",
    "HOLDEM_STARTING_CHIPS",
    "HOLDEM_PLAYERS",
    "HOLDEM_AI",
];

/// Sets the given variables for the duration of one `cfg` run.
fn cfg_with_env(vars: &[(&str, &str)]) -> (i32, String, String) {
    for key in ENV_KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
    for (key, value) in vars {
        unsafe {
            std::env::set_var(key, value);
        }
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["holdem", "cfg"], &mut out, &mut err);
    for (key, _) in vars {
        unsafe {
            std::env::remove_var(key);
        }
    }
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn entry<'a>(json: &'a Value, key: &str) -> (&'a Value, &'a str) {
    (&json[key]["value"], json[key]["source"].as_str().unwrap())
}

#[test]
#[serial]
fn defaults_are_reported_as_default() {
    let (code, stdout, stderr) = cfg_with_env(&[]);
    assert_eq!(code, 0);
    assert!(stderr.is_empty());
    let json: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(entry(&json, "seed"), (&Value::Null, "default"));
    assert_eq!(entry(&json, "small_blind"), (&Value::from(1), "default"));
    assert_eq!(entry(&json, "big_blind"), (&Value::from(2), "default"));
    assert_eq!(entry(&json, "starting_chips"), (&Value::from(1000), "default"));
    assert_eq!(entry(&json, "players"), (&Value::from(4), "default"));
    assert_eq!(entry(&json, "ai").1, "default");
}

#[test]
#[serial]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holdem.toml");
    fs::write(
        &path,
        "seed = 11\nbig_blind = 10\nsmall_blind = 5\nai = [\"naive\", \"bully\"]\n",
    )
    .unwrap();

    let (code, stdout, _) = cfg_with_env(&[("HOLDEM_CONFIG", path.to_str().unwrap())]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entry(&json, "seed"), (&Value::from(11), "file"));
    assert_eq!(entry(&json, "big_blind"), (&Value::from(10), "file"));
    assert_eq!(entry(&json, "small_blind"), (&Value::from(5), "file"));
    assert_eq!(json["ai"]["value"], serde_json::json!(["naive", "bully"]));
    assert_eq!(entry(&json, "players").1, "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holdem.toml");
    fs::write(&path, "seed = 11\nplayers = 3\n").unwrap();

    let (code, stdout, _) = cfg_with_env(&[
        ("HOLDEM_CONFIG", path.to_str().unwrap()),
        ("HOLDEM_SEED", "99"),
        ("HOLDEM_AI", "random, fiscal"),
    ]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entry(&json, "seed"), (&Value::from(99), "env"));
    assert_eq!(entry(&json, "players"), (&Value::from(3), "file"));
    assert_eq!(json["ai"]["value"], serde_json::json!(["random", "fiscal"]));
    assert_eq!(entry(&json, "ai").1, "env");
}

#[test]
#[serial]
fn unparsable_env_value_fails() {
    let (code, stdout, stderr) = cfg_with_env(&[("HOLDEM_SEED", "abc")]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid HOLDEM_SEED"));
}

#[test]
#[serial]
fn small_blind_above_big_blind_fails() {
    let (code, _, stderr) =
        cfg_with_env(&[("HOLDEM_SMALL_BLIND", "10"), ("HOLDEM_BIG_BLIND", "4")]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid configuration"));
}

#[test]
#[serial]
fn missing_config_file_fails() {
    let (code, _, stderr) = cfg_with_env(&[("HOLDEM_CONFIG", "/nonexistent/holdem.toml")]);
    assert_eq!(code, 2);
    assert!(stderr.contains("cannot read config file"));
}

#[test]
#[serial]
fn malformed_toml_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "big_blind = \"lots\"\n").unwrap();
    let (code, _, stderr) = cfg_with_env(&[("HOLDEM_CONFIG", path.to_str().unwrap())]);
    assert_eq!(code, 2);
    assert!(stderr.contains("cannot parse config file"));
}
