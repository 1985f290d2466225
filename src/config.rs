//! Optional TOML configuration.
//!
//! ```toml
//! colormap = "magma"
//!
//! [legend]
//! length = 400
//! font_scale = 3
//! ```
//!
//! Missing keys take their default values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colormap::Colormap;
use crate::error::{Error, Result};
use crate::legend::LegendStyle;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Colormap used when a command does not name one.
    pub colormap: Colormap,
    pub legend: LegendStyle,
}

impl Config {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|source| Error::Config { path: path.to_path_buf(), source })
    }

    /// Read the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(path, &text)
    }

    /// The colormap to use: `requested` if given, else the configured one.
    pub fn colormap_or(&self, requested: Option<&str>) -> Result<Colormap> {
        match requested {
            Some(name) => name.parse(),
            None => Ok(self.colormap),
        }
    }
}
