// integration tests for the config command

use crate::common::*;
use std::fs;

// ============================================================================
// config path tests
// ============================================================================

#[test]
fn test_config_path_explicit() {
    let env = TestEnv::new();
    let path = env.path().join("custom.json5");

    let output = env.run_text(&["--config", path.to_str().unwrap(), "config", "path"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), path.display().to_string());
}

#[test]
fn test_config_path_env_var() {
    let env = TestEnv::new();
    let path = env.path().join("from-env.json5");

    let output = env.run_with_env(
        &["--no-json", "config", "path"],
        &[("MEDIAQ_CONFIG", path.to_str().unwrap())],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), path.display().to_string());
}

#[test]
fn test_config_path_local_file() {
    let env = TestEnv::new();
    env.write_config("mediaq.json5", "{}");

    let output = env.run_text(&["config", "path"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "mediaq.json5");
}

#[test]
fn test_config_path_json() {
    let env = TestEnv::new();
    let path = env.write_config("present.json5", "{}");

    let (output, json) = env.run_json(&["--config", path.to_str().unwrap(), "config", "path"]);

    assert!(output.status.success());
    assert_eq!(json["result"]["path"], path.display().to_string());
    assert_eq!(json["result"]["exists"], true);
}

// ============================================================================
// config show / default tests
// ============================================================================

#[test]
fn test_config_show_without_file_uses_defaults() {
    let env = TestEnv::new();
    let (output, json) = env.run_json(&["config", "show"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(json["result"]["breakpoints"]["phone"], "320px");
    assert_eq!(json["result"]["settings"]["static_breakpoint"], "desktop");
}

#[test]
fn test_config_show_partial_json5_keeps_defaults() {
    let env = TestEnv::new();
    let path = env.write_config(
        "partial.json5",
        r#"{
            // only override one setting
            settings: { strict: false, },
        }"#,
    );

    let (output, json) = env.run_json(&["--config", path.to_str().unwrap(), "config", "show"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let result = &json["result"];
    assert_eq!(result["settings"]["strict"], false);
    assert_eq!(result["settings"]["media_support"], true);
    assert_eq!(result["breakpoints"]["tablet"], "768px");
    assert_eq!(result["media_expressions"]["screen"], "screen");
    assert_eq!(result["unit_intervals"]["em"], 0.01);
}

#[test]
fn test_config_default_text() {
    let env = TestEnv::new();
    let output = env.run_text(&["config", "default"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["breakpoints"]["desktop"], "1024px");
    assert_eq!(
        value["media_expressions"]["retina3x"],
        "(-webkit-min-device-pixel-ratio: 3), (min-resolution: 350dpi), (min-resolution: 3dppx)"
    );
}

#[test]
fn test_config_show_parse_error() {
    let env = TestEnv::new();
    let path = env.write_config("broken.json5", "{ breakpoints: ");

    let output = env.run_text(&["--config", path.to_str().unwrap(), "config", "show"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to parse config file"));
}

#[test]
fn test_config_missing_explicit_file() {
    let env = TestEnv::new();
    let path = env.path().join("missing.json5");

    let output = env.run_text(&["--config", path.to_str().unwrap(), "query", ">phone"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("config file not found"));
}

// ============================================================================
// config verify tests
// ============================================================================

#[test]
fn test_config_verify_valid() {
    let env = TestEnv::new();
    let path = env.write_json_config(
        "valid.json5",
        &serde_json::json!({
            "breakpoints": { "small": "480px", "desktop": "1200px" },
        }),
    );

    let output = env.run_text(&["--config", path.to_str().unwrap(), "config", "verify"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("valid"));
}

#[test]
fn test_config_verify_without_file() {
    let env = TestEnv::new();
    let output = env.run_text(&["config", "verify"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("defaults"));
}

#[test]
fn test_config_verify_reports_problems() {
    let env = TestEnv::new();
    let path = env.write_json_config(
        "invalid.json5",
        &serde_json::json!({
            "breakpoints": { "small": "30vw" },
            "settings": { "static_breakpoint": "wide" },
        }),
    );

    let output = env.run_text(&["--config", path.to_str().unwrap(), "config", "verify"]);

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("settings.static_breakpoint: unknown breakpoint 'wide'"));
    assert!(err.contains("breakpoints.small: no unit interval defined for vw"));
}

#[test]
fn test_config_verify_json_details() {
    let env = TestEnv::new();
    let path = env.write_json_config(
        "invalid.json5",
        &serde_json::json!({
            "settings": { "static_expressions": ["screen", "tv"] },
        }),
    );

    let (output, json) = env.run_json(&["--config", path.to_str().unwrap(), "config", "verify"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(json["error"]["code"], -32002);
    let details = json["error"]["data"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert!(details[0].as_str().unwrap().contains("'tv'"));
}

// ============================================================================
// config set tests
// ============================================================================

#[test]
fn test_config_set_creates_file() {
    let env = TestEnv::new();
    let path = env.path().join("nested").join("config.json5");
    let config = path.to_str().unwrap();

    let output = env.run_text(&["--config", config, "config", "set", "breakpoints.wide", "1440px"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Set breakpoints.wide = 1440px"));

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["breakpoints"]["wide"], "1440px");
    assert_eq!(saved["breakpoints"]["phone"], "320px");

    // the new breakpoint is usable right away
    let output = env.run_text(&["--config", config, "query", ">wide"]);
    assert_eq!(stdout(&output).trim(), "(min-width: 1441px)");
}

#[test]
fn test_config_set_settings_changes_mode() {
    let env = TestEnv::new();
    let path = env.write_config("config.json5", "{}");
    let config = path.to_str().unwrap();

    let output = env.run_text(&["--config", config, "config", "set", "settings.media_support", "false"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let output = env.run_text(&["--config", config, "query", ">=tablet"]);
    assert_eq!(stdout(&output).trim(), "suppressed");
}

#[test]
fn test_config_set_unknown_key() {
    let env = TestEnv::new();
    let path = env.path().join("config.json5");

    let output = env.run_text(&[
        "--config",
        path.to_str().unwrap(),
        "config",
        "set",
        "settings.animate",
        "true",
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown config key"));
    assert!(!path.exists());
}

#[test]
fn test_config_set_invalid_value() {
    let env = TestEnv::new();
    let path = env.path().join("config.json5");

    let output = env.run_text(&[
        "--config",
        path.to_str().unwrap(),
        "config",
        "set",
        "settings.strict",
        "perhaps",
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid value `perhaps`"));
}
