//! Tests for `dbtr run`.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_run_injects_configuration() {
    let t = Test::configured(STANDARD_ANSWERS);

    let output = t.run(&["sh", "-c", "echo \"$DBT_TARGET:$WAREHOUSE_ROLE\""]);
    assert_success(&output);
    assert_stdout_contains(&output, "prod:TRANSFORMER");
}

#[cfg(unix)]
#[test]
fn test_run_without_saved_config_uses_defaults() {
    let t = Test::new();

    let output = t.run(&["sh", "-c", "echo \"target=$DBT_TARGET\""]);
    assert_success(&output);
    assert_stdout_contains(&output, "target=dev");
}

#[cfg(unix)]
#[test]
fn test_run_host_environment_wins() {
    let t = Test::configured(STANDARD_ANSWERS);

    let output = t
        .cmd()
        .env("DBT_TARGET", "from-host")
        .args(["run", "--", "sh", "-c", "echo \"$DBT_TARGET\""])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "from-host");
}

#[cfg(unix)]
#[test]
fn test_run_exit_code_passthrough() {
    let t = Test::new();

    let output = t.run(&["sh", "-c", "exit 42"]);
    assert_eq!(output.status.code(), Some(42));
}

#[test]
fn test_run_unknown_command_fails() {
    let t = Test::new();

    let output = t.run(&["dbtr-no-such-program-xyz"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "command not found");
}

#[test]
fn test_run_requires_command() {
    let t = Test::new();
    let output = t.cmd().arg("run").output().unwrap();
    assert_failure(&output);
}
