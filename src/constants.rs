use indoc::indoc;

/// The name of the directory holding panenav's files inside the config directory.
pub const CONFIG_DIR_NAME: &str = "panenav";

/// The name of the config file inside [`CONFIG_DIR_NAME`].
pub const DEFAULT_CONFIG_FILE_NAME: &str = "panenav.toml";

// Layout size, in cells, if the layout file does not set one.
pub const DEFAULT_LAYOUT_WIDTH: u32 = 80;
pub const DEFAULT_LAYOUT_HEIGHT: u32 = 24;

/// Default text written to a newly created config file.
pub const CONFIG_TEXT: &str = indoc! {r#"
    # This is a default config file for panenav. All of the settings are commented
    # out by default; if you wish to change them uncomment and modify as you see
    # fit.

    # This group of options represents a command-line option. Flags explicitly
    # added when running (ie: panenav --no_tiebreak) will override this config file.
    [flags]

    # Whether to use the cursor position to pick between equally close panes.
    #cursor_tiebreak = true

    # The direction to move in if none is given on the command line.
    #default_direction = "right"

    # The layout file to read if none is given on the command line.
    #layout = "/path/to/layout.toml"
"#};
