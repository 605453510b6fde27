//! Test fixtures and constants.

/// Standard variable template.
///
/// Editable variables, in prompt order: DBT_TARGET, WAREHOUSE_PASSWORD,
/// WAREHOUSE_ROLE. DBT_PROFILES_DIR is not user-editable.
pub const TEMPLATE: &str = r#"
description: dbt runner configuration
variables:
  DBT_TARGET:
    description: Target profile
    default: dev
  WAREHOUSE_PASSWORD:
    description: Warehouse password
    secret: true
  DBT_PROFILES_DIR:
    description: Profiles directory inside the container
    default: /dbt-runner/profiles
    user: false
  WAREHOUSE_ROLE:
    description: Warehouse role
"#;

/// Standard template minus WAREHOUSE_ROLE.
pub const TEMPLATE_WITHOUT_ROLE: &str = r#"
description: dbt runner configuration
variables:
  DBT_TARGET:
    description: Target profile
    default: dev
  WAREHOUSE_PASSWORD:
    description: Warehouse password
    secret: true
  DBT_PROFILES_DIR:
    description: Profiles directory inside the container
    default: /dbt-runner/profiles
    user: false
"#;

/// Every variable name the templates declare.
pub const VARIABLES: &[&str] = &[
    "DBT_TARGET",
    "WAREHOUSE_PASSWORD",
    "DBT_PROFILES_DIR",
    "WAREHOUSE_ROLE",
];

/// Answers for the three editable variables.
pub const STANDARD_ANSWERS: &str = "prod\nhunter2\nTRANSFORMER\n";

/// Answers that keep every current value.
pub const KEEP_ALL: &str = "\n\n\n";
