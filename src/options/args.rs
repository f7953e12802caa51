// Argument parsing via clap.
//
// This file is also pulled into the build script with `include!`, so keep it to
// a single file with no inner doc comments.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "panenav [OPTIONS] --layout <PATH> [DIRECTION]";

/// The arguments for panenav.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct PanenavArgs {
    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub navigation_args: NavigationArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long = "config_location",
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub config_location: Option<String>,

    #[arg(
        short = 'l',
        long,
        value_name = "PATH",
        help = "Sets the location of the layout file.",
        long_help = indoc! {
            "Sets the location of the layout file. Expects a TOML file describing the pane tree,
            for example:

                width = 120
                height = 40
                split = \"horizontal\"

                [[child]]
                name = \"editor\"
                ratio = 2

                [[child]]
                split = \"vertical\"
                    [[child.child]]
                    name = \"shell\"
                    [[child.child]]
                    name = \"logs\""
        }
    )]
    pub layout: Option<String>,

    #[arg(
        long,
        help = "Prints the containers and panes found in the layout, then exits."
    )]
    pub list: bool,

    #[arg(
        long = "show_changed_config",
        help = "Prints config flags that differ from their defaults, then exits."
    )]
    pub show_changed_config: bool,

    #[arg(
        long = "debug_log",
        value_name = "PATH",
        help = "Writes debug logs to the given file. Requires the 'logging' feature."
    )]
    pub debug_log: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Navigation Options")]
pub struct NavigationArgs {
    #[arg(
        value_name = "DIRECTION",
        ignore_case = true,
        value_parser = ["left", "right", "up", "down"],
        help = "The direction to move focus in.",
        long_help = "The direction to move focus in. If not set, the 'default_direction' flag \
                    from the config file is used."
    )]
    pub direction: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_name = "PANE",
        help = "The name of the pane that currently has focus."
    )]
    pub from: Option<String>,

    #[arg(
        short = 'c',
        long,
        value_name = "X,Y",
        help = "The cursor position within the focused pane.",
        long_help = "The cursor position within the focused pane, relative to its top-left \
                    corner. Used to pick between panes that are equally close. Defaults to the \
                    centre of the pane."
    )]
    pub cursor: Option<String>,

    #[arg(
        long = "no_tiebreak",
        help = "Ignores the cursor when breaking ties.",
        long_help = "Ignores the cursor when breaking ties between equally close panes, always \
                    picking the first one found in the layout."
    )]
    pub no_tiebreak: bool,

    #[arg(
        short = 'v',
        long,
        help = "Prints the candidate and tied panes alongside the result."
    )]
    pub verbose: bool,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info.")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}
