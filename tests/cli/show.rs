//! Tests for `dbtr show`.

use crate::support::*;

#[test]
fn test_show_without_config_uses_defaults() {
    let t = Test::new();

    let output = t.show();
    assert_success(&output);
    assert_stdout_contains(&output, "Configuration (unpersisted)");
    assert_stdout_contains(&output, "dev");
    assert_stdout_contains(&output, "(unset)");
    assert!(!t.blob_path().exists());
    assert!(!t.key_path().exists());
}

#[test]
fn test_show_masks_secrets() {
    let t = Test::configured(STANDARD_ANSWERS);

    let output = t.show();
    assert_success(&output);
    assert_stdout_contains(&output, "Configuration (persisted)");
    assert_stdout_contains(&output, "****er2");
    assert_stdout_excludes(&output, "hunter2");
}

#[test]
fn test_show_json_masks_secrets() {
    let t = Test::configured(STANDARD_ANSWERS);
    assert_eq!(t.show_json()["WAREHOUSE_PASSWORD"], "****er2");
}

#[test]
fn test_show_reads_environment_before_first_save() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("DBT_TARGET", "ci")
        .args(["show", "--json"])
        .output()
        .unwrap();
    assert_success(&output);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["DBT_TARGET"], "ci");
}

#[test]
fn test_show_warns_about_orphans() {
    let t = Test::configured(STANDARD_ANSWERS);
    t.write_template(TEMPLATE_WITHOUT_ROLE);

    let output = t.show();
    assert_success(&output);
    assert_stderr_contains(&output, "no longer declares");
    assert_eq!(stderr(&output).matches("WAREHOUSE_ROLE").count(), 1);
    assert_stdout_excludes(&output, "WAREHOUSE_ROLE");
}
