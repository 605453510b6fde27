//! Tests for `dbtr config`.

use crate::support::*;

#[test]
fn test_config_saves_answers() {
    let t = Test::new();

    let output = t.config(STANDARD_ANSWERS);
    assert_success(&output);
    assert_stdout_contains(&output, "saved 4 variables");
    assert!(t.blob_path().exists());
    assert!(t.key_path().exists());

    let json = t.show_json();
    assert_eq!(json["DBT_TARGET"], "prod");
    assert_eq!(json["WAREHOUSE_ROLE"], "TRANSFORMER");
    assert_eq!(json["DBT_PROFILES_DIR"], "/dbt-runner/profiles");
}

#[test]
fn test_config_blob_is_encrypted() {
    let t = Test::configured(STANDARD_ANSWERS);

    let raw = std::fs::read(t.blob_path()).unwrap();
    let text = String::from_utf8_lossy(&raw);
    assert!(!text.contains("hunter2"));
    assert!(!text.contains("TRANSFORMER"));
}

#[test]
fn test_config_prompts_in_template_order() {
    let t = Test::new();

    let output = t.config(KEEP_ALL);
    assert_success(&output);

    let err = stderr(&output);
    let target = err.find("DBT_TARGET").expect("no DBT_TARGET prompt");
    let password = err.find("WAREHOUSE_PASSWORD").expect("no password prompt");
    let role = err.find("WAREHOUSE_ROLE").expect("no role prompt");
    assert!(target < password && password < role);
    assert!(!err.contains("DBT_PROFILES_DIR"));
}

#[test]
fn test_config_prompt_shows_description_and_default() {
    let t = Test::new();
    let output = t.config(KEEP_ALL);
    assert_stderr_contains(&output, "DBT_TARGET (Target profile) [dev]");
}

#[test]
fn test_config_masks_secret_hint() {
    let t = Test::configured(STANDARD_ANSWERS);

    let output = t.config(KEEP_ALL);
    assert_success(&output);
    assert_stderr_contains(&output, "WAREHOUSE_PASSWORD (Warehouse password) [****er2]");
    assert!(!stderr(&output).contains("hunter2"));
}

#[test]
fn test_config_empty_answers_keep_everything() {
    let t = Test::configured(STANDARD_ANSWERS);
    let before = t.show_json();

    assert_success(&t.config(KEEP_ALL));
    assert_eq!(t.show_json(), before);
}

#[test]
fn test_config_none_clears_default() {
    let t = Test::new();

    assert_success(&t.config("None\n\n\n"));

    let json = t.show_json();
    assert!(json["DBT_TARGET"].is_null());

    let output = t.env();
    assert!(env_lines(&output).contains(&("DBT_TARGET".to_string(), String::new())));
}

#[test]
fn test_config_none_is_case_sensitive() {
    let t = Test::new();
    assert_success(&t.config("none\n\n\n"));
    assert_eq!(t.show_json()["DBT_TARGET"], "none");
}

#[test]
fn test_config_closed_stdin_keeps_defaults() {
    let t = Test::new();

    assert_success(&t.config(""));
    let json = t.show_json();
    assert_eq!(json["DBT_TARGET"], "dev");
    assert!(json["WAREHOUSE_ROLE"].is_null());
}

#[test]
fn test_config_reuses_existing_key() {
    let t = Test::new();
    assert_success(&t.config(STANDARD_ANSWERS));
    let key = std::fs::read(t.key_path()).unwrap();

    assert_success(&t.config(KEEP_ALL));
    assert_eq!(std::fs::read(t.key_path()).unwrap(), key);
}
