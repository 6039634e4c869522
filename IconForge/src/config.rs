//! Project configuration (`iconforge.toml`)
//!
//! Every field has a default matching the usual Android module layout, so the
//! file is optional and may list only what differs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "iconforge.toml";

fn default_res_dir() -> PathBuf {
    PathBuf::from("src/main/res/values")
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("src/main/assets/iconfont")
}

fn default_svg_dir() -> PathBuf {
    PathBuf::from("svg-icons")
}

fn default_temp_dir() -> PathBuf {
    PathBuf::from("temp")
}

fn default_endpoint() -> String {
    "http://localhost:3000/convert".to_string()
}

/// The full project file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub convert: ConvertSettings,
}

/// Where inputs are read from and outputs written to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Directory receiving `iconfont_<topic>.xml`
    #[serde(default = "default_res_dir")]
    pub res_dir: PathBuf,
    /// Directory receiving `<topic>.ttf`
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    /// Root holding one SVG directory per topic
    #[serde(default = "default_svg_dir")]
    pub svg_dir: PathBuf,
    /// Scratch directory for archives and the unpacked conversion result
    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            res_dir: default_res_dir(),
            assets_dir: default_assets_dir(),
            svg_dir: default_svg_dir(),
            temp_dir: default_temp_dir(),
        }
    }
}

/// Conversion service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl ProjectConfig {
    /// Parse a project file's text
    ///
    /// # Errors
    /// Returns [`Error::ConfigParse`] if the text is not valid for this schema.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load the project file
    ///
    /// With an explicit path the file must exist. Without one,
    /// `iconforge.toml` in the working directory is used if present and the
    /// defaults otherwise.
    ///
    /// # Errors
    /// Returns [`Error::ConfigNotFound`] for a missing explicit file, or a
    /// read/parse error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path) => path.to_path_buf(),
            None => {
                let implicit = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !implicit.is_file() {
                    tracing::debug!("No {DEFAULT_CONFIG_FILE}, using defaults");
                    return Ok(Self::default());
                }
                implicit
            }
        };

        tracing::debug!("Loading config from {}", path.display());
        Self::from_toml_str(&fs::read_to_string(&path)?)
    }
}
