//! Moving focus around the layouts in `tests/valid_layouts`.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{no_cfg_panenav_command, GRID, SIDE_BY_SIDE};

fn moves_to(layout: &str, from: &str, args: &[&str], target: &str) {
    let mut all_args = vec!["-l", layout, "-f", from];
    all_args.extend_from_slice(args);

    no_cfg_panenav_command(&all_args)
        .assert()
        .success()
        .stdout(format!("{target}\n"));
}

fn stays_put(layout: &str, from: &str, direction: &str) {
    no_cfg_panenav_command(&["-l", layout, "-f", from, direction])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_side_by_side() {
    moves_to(SIDE_BY_SIDE, "shell", &["left"], "editor");
    moves_to(SIDE_BY_SIDE, "logs", &["left"], "editor");
    moves_to(SIDE_BY_SIDE, "shell", &["down"], "logs");
    moves_to(SIDE_BY_SIDE, "logs", &["up"], "shell");
}

#[test]
fn test_nothing_in_direction() {
    stays_put(SIDE_BY_SIDE, "editor", "left");
    stays_put(SIDE_BY_SIDE, "editor", "up");
    stays_put(SIDE_BY_SIDE, "shell", "right");
    stays_put(SIDE_BY_SIDE, "logs", "down");
}

#[test]
fn test_cursor_breaks_ties() {
    // The centre of the editor lines up with the shell.
    moves_to(SIDE_BY_SIDE, "editor", &["right"], "shell");
    moves_to(SIDE_BY_SIDE, "editor", &["-c", "10,30", "right"], "logs");
    moves_to(SIDE_BY_SIDE, "editor", &["-c", "10,5", "right"], "shell");
}

#[test]
fn test_no_tiebreak_picks_first() {
    moves_to(
        SIDE_BY_SIDE,
        "editor",
        &["--no_tiebreak", "-c", "10,30", "right"],
        "shell",
    );
}

#[test]
fn test_grid() {
    moves_to(GRID, "top_left", &["right"], "top_right");
    moves_to(GRID, "top_left", &["down"], "bottom_left");
    moves_to(GRID, "bottom_right", &["up"], "top_right");
    moves_to(GRID, "bottom_right", &["left"], "bottom_left");

    moves_to(GRID, "top_left", &["-c", "0,40", "right"], "bottom_right");
    moves_to(GRID, "bottom_left", &["-c", "70,0", "up"], "top_right");
}

#[test]
fn test_verbose() {
    no_cfg_panenav_command(&["-l", SIDE_BY_SIDE, "-f", "editor", "-c", "0,30", "-v", "right"])
        .assert()
        .success()
        .stdout("logs\n")
        .stderr(predicate::str::contains("moving right from 'editor'"))
        .stderr(predicate::str::contains("candidates: shell, logs"))
        .stderr(predicate::str::contains("tied: shell, logs"))
        .stderr(predicate::str::contains(
            "target: logs (67e55044-10b1-426f-9247-bb680e5fe0c8)",
        ));
}

#[test]
fn test_verbose_without_target() {
    no_cfg_panenav_command(&["-l", SIDE_BY_SIDE, "-f", "editor", "-v", "left"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("target: none"));
}
