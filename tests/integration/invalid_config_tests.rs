//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{panenav_command, SIDE_BY_SIDE};

#[test]
fn test_toml_mismatch_type() {
    panenav_command(&[
        "-C",
        "./tests/invalid_configs/toml_mismatch_type.toml",
        "-l",
        SIDE_BY_SIDE,
        "--list",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_bad_default_direction() {
    panenav_command(&[
        "-C",
        "./tests/invalid_configs/bad_direction.toml",
        "-l",
        SIDE_BY_SIDE,
        "-f",
        "shell",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains(
        "'default_direction' was set with an invalid value",
    ));
}

#[test]
fn test_layout_from_config_does_not_exist() {
    panenav_command(&["-C", "./tests/invalid_configs/missing_layout.toml", "--list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read the layout file"));
}
