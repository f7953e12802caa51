//! These tests are for layout files that should be rejected.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::no_cfg_panenav_command;

fn rejects_layout(layout: &str, message: &str) {
    no_cfg_panenav_command(&["-l", layout, "--list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Found an issue while trying to build the layout"))
        .stderr(predicate::str::contains(message));
}

#[test]
fn test_empty_layout() {
    rejects_layout("./tests/invalid_layouts/empty_layout.toml", "at least one pane");
}

#[test]
fn test_duplicate_names() {
    rejects_layout(
        "./tests/invalid_layouts/duplicate_names.toml",
        "the pane name 'shell' is used more than once",
    );
}

#[test]
fn test_zero_ratio() {
    rejects_layout("./tests/invalid_layouts/zero_ratio.toml", "'ratio' must be greater than 0");
}

#[test]
fn test_unknown_split() {
    rejects_layout("./tests/invalid_layouts/unknown_split.toml", "diagonal");
}

#[test]
fn test_empty_container() {
    rejects_layout(
        "./tests/invalid_layouts/empty_container.toml",
        "the container 'right' must contain at least one child",
    );
}

#[test]
fn test_rect_past_limit() {
    rejects_layout(
        "./tests/invalid_layouts/rect_past_limit.toml",
        "reaches past the largest supported coordinate",
    );
}

#[test]
fn test_pane_typo() {
    rejects_layout("./tests/invalid_layouts/pane_typo.toml", "unknown field `nmae`");
}
