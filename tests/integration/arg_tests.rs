//! These tests are mostly here just to ensure that invalid results will be caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{no_cfg_panenav_command, SIDE_BY_SIDE};

#[test]
fn test_unknown_direction() {
    no_cfg_panenav_command(&["-l", SIDE_BY_SIDE, "-f", "shell", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'sideways'"));
}

#[test]
fn test_direction_ignores_case() {
    no_cfg_panenav_command(&["-l", SIDE_BY_SIDE, "-f", "shell", "LeFt"])
        .assert()
        .success()
        .stdout("editor\n");
}

#[test]
fn test_missing_layout() {
    no_cfg_panenav_command(&["-f", "shell", "left"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no layout file was given"));
}

#[test]
fn test_nonexistent_layout() {
    no_cfg_panenav_command(&["-l", "./tests/valid_layouts/nope.toml", "-f", "shell", "left"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read the layout file"));
}

#[test]
fn test_missing_from() {
    no_cfg_panenav_command(&["-l", SIDE_BY_SIDE, "left"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--from' must be set"));
}

#[test]
fn test_unknown_pane() {
    no_cfg_panenav_command(&["-l", SIDE_BY_SIDE, "-f", "browser", "left"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'browser' is not the name of a pane in the layout",
        ));
}

#[test]
fn test_containers_are_not_panes() {
    no_cfg_panenav_command(&["-l", SIDE_BY_SIDE, "-f", "right", "left"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'right' is not the name of a pane"));
}

#[test]
fn test_missing_direction() {
    no_cfg_panenav_command(&["-l", SIDE_BY_SIDE, "-f", "shell"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no direction was given"));
}

#[test]
fn test_invalid_cursor() {
    no_cfg_panenav_command(&["-l", SIDE_BY_SIDE, "-f", "editor", "-c", "12", "right"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--cursor' was set with an invalid value",
        ));
}

#[test]
fn test_help() {
    no_cfg_panenav_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Navigation Options"));
}

#[test]
fn test_list() {
    no_cfg_panenav_command(&["-l", SIDE_BY_SIDE, "--list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "root horizontal 120x40+0+0\ncontainer right vertical 40x40+80+0\npane editor 80x40+0+0 ",
        ))
        .stdout(predicate::str::contains(
            "pane logs 40x20+80+20 67e55044-10b1-426f-9247-bb680e5fe0c8\n",
        ));
}
