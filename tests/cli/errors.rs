//! Error reporting tests.

use crate::support::*;

#[test]
fn test_missing_template_fails() {
    let t = Test::bare();

    let output = t.show();
    assert_failure(&output);
    assert_stderr_contains(&output, "template not found");
    assert_stderr_contains(&output, "--template");
}

#[test]
fn test_malformed_template_fails() {
    let t = Test::bare();
    t.write_template("variables: [unclosed");

    let output = t.show();
    assert_failure(&output);
    assert_stderr_contains(&output, "malformed template");
}

#[test]
fn test_regenerated_key_fails_to_decrypt() {
    let t = Test::configured(STANDARD_ANSWERS);

    std::fs::remove_file(t.key_path()).unwrap();

    let output = t.show();
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "decryption failed");
    assert_stderr_contains(&output, "delete the configuration file");
}

#[test]
fn test_corrupt_blob_fails_to_decrypt() {
    let t = Test::configured(STANDARD_ANSWERS);

    let bytes = std::fs::read(t.blob_path()).unwrap();
    std::fs::write(t.blob_path(), &bytes[..bytes.len() / 2]).unwrap();

    let output = t.env();
    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
}

#[test]
fn test_deleting_blob_falls_back_to_defaults() {
    let t = Test::configured(STANDARD_ANSWERS);
    std::fs::remove_file(t.key_path()).unwrap();
    std::fs::remove_file(t.blob_path()).unwrap();

    assert_eq!(t.show_json()["DBT_TARGET"], "dev");
}

#[test]
fn test_unreadable_key_path_fails() {
    let t = Test::configured(STANDARD_ANSWERS);
    std::fs::remove_file(t.key_path()).unwrap();
    std::fs::create_dir(t.key_path()).unwrap();

    let output = t.show();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read key file");
}
