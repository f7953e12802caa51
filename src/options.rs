//! How panenav handles arguments, the config file and the layout file.

pub mod args;
pub mod config;
mod error;

use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

pub use self::{
    config::{layout::LayoutConfig, Config, ConfigFlags},
    error::{OptionError, OptionResult},
};
use crate::{
    constants::{CONFIG_DIR_NAME, CONFIG_TEXT, DEFAULT_CONFIG_FILE_NAME},
    layout_manager::LayoutTree,
    navigation::Direction,
    options::args::NavigationArgs,
};

/// Returns the directory panenav keeps its files in.
///
/// This is `$XDG_CONFIG_HOME/panenav` if `XDG_CONFIG_HOME` is set, otherwise
/// `~/.config/panenav`. On Windows the platform config directory is used
/// instead of `~/.config`.
pub fn get_config_dir() -> Option<PathBuf> {
    let config_dir = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ if cfg!(target_os = "windows") => dirs::config_dir(),
        _ => dirs::home_dir().map(|home| home.join(".config")),
    };

    let config_dir = config_dir.map(|dir| dir.join(CONFIG_DIR_NAME));
    debug!("Found config dir: {config_dir:?}");

    config_dir
}

/// Returns the config path to use. If `override_config_path` is set, it is
/// used; otherwise the default path inside [`get_config_dir`] is.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    match override_config_path {
        Some(path) => Some(path.to_path_buf()),
        None => get_config_dir().map(|dir| dir.join(DEFAULT_CONFIG_FILE_NAME)),
    }
}

/// Reads the config file at `config_path`. If it does not exist, a default one
/// is written there and the default [`Config`] is returned.
pub fn get_or_create_config(config_path: Option<&Path>) -> OptionResult<Config> {
    let Some(path) = config_path else {
        // Don't write, the config path was somehow None...
        return Ok(Config::default());
    };

    match fs::read_to_string(path) {
        Ok(config_string) => Ok(toml_edit::de::from_str(&config_string)?),
        Err(_) => {
            if let Some(parent_path) = path.parent() {
                fs::create_dir_all(parent_path)?;
            }
            fs::File::create(path)?.write_all(CONFIG_TEXT.as_bytes())?;
            info!("Created a default config file at {}", path.display());

            Ok(Config::default())
        }
    }
}

/// Reads and builds the layout file at `path`.
pub fn read_layout(path: &Path) -> OptionResult<LayoutTree> {
    let layout_string = fs::read_to_string(path).map_err(|err| {
        OptionError::other(format!(
            "could not read the layout file at '{}': {err}",
            path.display()
        ))
    })?;
    let layout: LayoutConfig = toml_edit::de::from_str(&layout_string)?;

    Ok(layout.build_tree()?)
}

/// Parses a cursor position of the form `X,Y`.
pub fn parse_cursor(cursor: &str) -> OptionResult<(i32, i32)> {
    let parsed = cursor
        .split_once(',')
        .and_then(|(x, y)| Some((x.trim().parse().ok()?, y.trim().parse().ok()?)));

    parsed.ok_or_else(|| OptionError::invalid_arg_value("cursor"))
}

/// The navigation settings, after merging the arguments and the config file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSettings {
    pub cursor_tiebreak: bool,
    pub direction: Option<Direction>,
    pub cursor: Option<(i32, i32)>,
    pub layout: Option<PathBuf>,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            cursor_tiebreak: true,
            direction: None,
            cursor: None,
            layout: None,
        }
    }
}

impl NavSettings {
    /// Builds the settings. Arguments take precedence over the config file.
    pub fn new(
        args: &NavigationArgs, layout_arg: Option<&str>, config: &Config,
    ) -> OptionResult<Self> {
        let flags = config.flags.clone().unwrap_or_default();

        let cursor_tiebreak = !args.no_tiebreak && flags.cursor_tiebreak.unwrap_or(true);

        let direction = match (&args.direction, &flags.default_direction) {
            (Some(direction), _) => Some(
                direction
                    .parse::<Direction>()
                    .map_err(|_| OptionError::invalid_arg_value("direction"))?,
            ),
            (None, Some(direction)) => Some(
                direction
                    .parse::<Direction>()
                    .map_err(|_| OptionError::invalid_config_value("default_direction"))?,
            ),
            (None, None) => None,
        };

        let cursor = args.cursor.as_deref().map(parse_cursor).transpose()?;

        let layout = layout_arg
            .or(flags.layout.as_deref())
            .map(PathBuf::from);

        Ok(Self {
            cursor_tiebreak,
            direction,
            cursor,
            layout,
        })
    }

    /// The settings that can be changed from the config file, as strings.
    pub fn as_map(&self) -> IndexMap<&'static str, String> {
        let mut map = IndexMap::new();
        map.insert("cursor_tiebreak", self.cursor_tiebreak.to_string());
        map.insert(
            "default_direction",
            self.direction
                .map(|direction| direction.to_string())
                .unwrap_or_default(),
        );
        map.insert(
            "layout",
            self.layout
                .as_ref()
                .map(|layout| layout.display().to_string())
                .unwrap_or_default(),
        );

        map
    }
}
