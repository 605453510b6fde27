//! Tests for `dbtr status`.

use crate::support::*;

#[test]
fn test_status_before_first_save() {
    let t = Test::new();

    let output = t.status();
    assert_success(&output);
    assert_stdout_contains(&output, "4 variables");
    assert_stdout_contains(&output, "unpersisted");
    assert_stdout_contains(&output, "not created yet");
    assert_stderr_contains(&output, "run: dbtr config");
    assert!(!t.key_path().exists());
}

#[test]
fn test_status_after_save() {
    let t = Test::configured(STANDARD_ANSWERS);

    let output = t.status();
    assert_success(&output);
    assert_stdout_contains(&output, "persisted, written");
    assert_stdout_contains(&output, "fingerprint");
}

#[test]
fn test_status_reports_missing_template() {
    let t = Test::bare();

    let output = t.status();
    assert_success(&output);
    assert_stdout_contains(&output, "template not found");
}

#[test]
fn test_status_reports_unreadable_key_inline() {
    let t = Test::configured(STANDARD_ANSWERS);
    std::fs::remove_file(t.key_path()).unwrap();
    std::fs::create_dir(t.key_path()).unwrap();

    let output = t.status();
    assert_success(&output);
    assert_stdout_contains(&output, "4 variables");
    assert_stdout_contains(&output, "persisted, written");
    assert_stdout_contains(&output, "failed to read key file");
}
