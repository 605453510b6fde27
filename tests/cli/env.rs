//! Tests for `dbtr env`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_env_lists_all_variables_sorted() {
    let t = Test::configured(STANDARD_ANSWERS);

    let output = t.env();
    assert_success(&output);
    assert_eq!(
        env_lines(&output),
        vec![
            ("DBT_PROFILES_DIR".to_string(), "/dbt-runner/profiles".to_string()),
            ("DBT_TARGET".to_string(), "prod".to_string()),
            ("WAREHOUSE_PASSWORD".to_string(), "hunter2".to_string()),
            ("WAREHOUSE_ROLE".to_string(), "TRANSFORMER".to_string()),
        ]
    );
}

#[test]
fn test_env_unset_values_are_empty() {
    let t = Test::new();

    let output = t.env();
    assert_success(&output);
    let lines = env_lines(&output);
    assert!(lines.contains(&("WAREHOUSE_PASSWORD".to_string(), String::new())));
    assert!(lines.contains(&("DBT_TARGET".to_string(), "dev".to_string())));
}

#[test]
fn test_env_host_environment_wins() {
    let t = Test::configured(STANDARD_ANSWERS);

    let output = t.cmd().env("DBT_TARGET", "env_val").arg("env").output().unwrap();
    assert_success(&output);
    assert!(env_lines(&output).contains(&("DBT_TARGET".to_string(), "env_val".to_string())));
}

#[test]
fn test_env_excludes_orphans() {
    let t = Test::configured(STANDARD_ANSWERS);
    t.write_template(TEMPLATE_WITHOUT_ROLE);

    let output = t.env();
    assert_success(&output);
    assert_stdout_excludes(&output, "WAREHOUSE_ROLE");
}

#[test]
fn test_orphans_survive_template_round_trip() {
    let t = Test::configured(STANDARD_ANSWERS);

    t.write_template(TEMPLATE_WITHOUT_ROLE);
    assert_success(&t.set("DBT_TARGET", "staging"));

    t.write_template(TEMPLATE);
    let json = t.show_json();
    assert_eq!(json["DBT_TARGET"], "staging");
    assert_eq!(json["WAREHOUSE_ROLE"], "TRANSFORMER");
}

#[test]
fn test_env_multiline_value_stays_on_one_line() {
    let t = Test::configured(STANDARD_ANSWERS);
    assert_success(&t.set("WAREHOUSE_ROLE", "ANALYST\nDBT_PROFILES_DIR=/evil"));

    let output = t.env();
    assert_success(&output);
    let profiles: Vec<_> = env_lines(&output)
        .into_iter()
        .filter(|(name, _)| name == "DBT_PROFILES_DIR")
        .collect();
    assert_eq!(
        profiles,
        vec![("DBT_PROFILES_DIR".to_string(), "/dbt-runner/profiles".to_string())]
    );

    t.cmd()
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"WAREHOUSE_ROLE="ANALYST\nDBT_PROFILES_DIR=/evil""#,
        ))
        .stdout(predicate::str::contains("DBT_PROFILES_DIR=/evil\n").not());
}

#[test]
fn test_env_plain_values_are_not_quoted() {
    let t = Test::configured(STANDARD_ANSWERS);

    t.cmd()
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains("DBT_TARGET=prod\n"))
        .stdout(predicate::str::contains("WAREHOUSE_ROLE=TRANSFORMER\n"));
}
