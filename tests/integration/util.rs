use std::{ffi::OsString, path::Path, process::Command};

const PANENAV_EXE_PATH: &str = env!("CARGO_BIN_EXE_panenav");
const DEFAULT_CFG: [&str; 2] = ["-C", "./tests/valid_configs/empty_config.toml"];

pub const SIDE_BY_SIDE: &str = "./tests/valid_layouts/side_by_side.toml";
pub const GRID: &str = "./tests/valid_layouts/grid.toml";

pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        // We are going to trust that the path given is valid...
        path.to_owned().into_os_string()
    }
}

/// Returns the [`Command`] of a binary invocation of panenav. Config and layout
/// paths are made absolute.
pub fn panenav_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(PANENAV_EXE_PATH);

    let mut prev = "";
    for arg in args.iter() {
        if matches!(prev, "-C" | "--config_location" | "-l" | "--layout") {
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd
}

/// Returns the [`Command`] of a binary invocation of panenav with the default,
/// empty config file, followed by `args`.
pub fn no_cfg_panenav_command(args: &[&str]) -> Command {
    let args = DEFAULT_CFG.iter().chain(args).copied().collect::<Vec<_>>();
    panenav_command(&args)
}
