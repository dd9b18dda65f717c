//! Widget configuration.
//!
//! One immutable value object handed to the widget at construction; no
//! class-level or global defaults. Every field has a default so a config
//! file only needs to mention what it changes.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::rotation::{HorizontalRotation, VerticalRotation};

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How long a rendered block stays valid, in seconds.
    pub cache_timeout: u64,
    /// Output template; `{icon}` and `{screen}` are substituted.
    pub format: String,
    /// Hide the block entirely while the configured screen is disconnected.
    /// Has no effect unless `screen` is set.
    pub hide_if_disconnected: bool,
    pub horizontal_icon: String,
    pub horizontal_rotation: HorizontalRotation,
    /// Output to rotate. When unset, all connected outputs are rotated and
    /// the screen label falls back to the single output name or `ALL`.
    pub screen: Option<String>,
    pub vertical_icon: String,
    pub vertical_rotation: VerticalRotation,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cache_timeout: 10,
            format: "{icon}".to_owned(),
            hide_if_disconnected: false,
            horizontal_icon: "H".to_owned(),
            horizontal_rotation: HorizontalRotation::default(),
            screen: None,
            vertical_icon: "V".to_owned(),
            vertical_rotation: VerticalRotation::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| Error::ConfigParse {
            path: path.to_owned(),
            source,
        })
    }
}
