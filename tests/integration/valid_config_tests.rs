//! Tests config files that should work.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{panenav_command, SIDE_BY_SIDE};

#[test]
fn test_config_fills_in_layout_and_direction() {
    panenav_command(&["-C", "./tests/valid_configs/defaults.toml", "-f", "shell"])
        .assert()
        .success()
        .stdout("logs\n");
}

#[test]
fn test_args_override_config() {
    panenav_command(&["-C", "./tests/valid_configs/defaults.toml", "-f", "shell", "left"])
        .assert()
        .success()
        .stdout("editor\n");
}

#[test]
fn test_config_disables_tiebreak() {
    panenav_command(&[
        "-C",
        "./tests/valid_configs/no_tiebreak.toml",
        "-l",
        SIDE_BY_SIDE,
        "-f",
        "editor",
        "-c",
        "0,30",
        "right",
    ])
    .assert()
    .success()
    .stdout("shell\n");
}

#[test]
fn test_show_changed_config() {
    panenav_command(&["-C", "./tests/valid_configs/defaults.toml", "--show_changed_config"])
        .assert()
        .success()
        .stdout(
            "default_direction = down\nlayout = ./tests/valid_layouts/side_by_side.toml\n",
        );
}

#[test]
fn test_show_changed_config_when_empty() {
    panenav_command(&["-C", "./tests/valid_configs/empty_config.toml", "--show_changed_config"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_creates_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("nested").join("panenav.toml");

    panenav_command(&["-C", config_path.to_str().unwrap(), "-l", SIDE_BY_SIDE, "--list"])
        .assert()
        .success();

    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[flags]"));
    assert!(written.contains("#cursor_tiebreak = true"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location() {
    let dir = tempfile::tempdir().unwrap();

    panenav_command(&["-l", SIDE_BY_SIDE, "--list"])
        .env("XDG_CONFIG_HOME", dir.path())
        .assert()
        .success();

    assert!(dir.path().join("panenav").join("panenav.toml").exists());
}
