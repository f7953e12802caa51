pub mod layout;

use serde::Deserialize;

/// The app config file.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct Config {
    pub flags: Option<ConfigFlags>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct ConfigFlags {
    pub(crate) cursor_tiebreak: Option<bool>,
    pub(crate) default_direction: Option<String>,
    pub(crate) layout: Option<String>,
}
