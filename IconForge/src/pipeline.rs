//! Stylesheet -> resource document -> font asset
//!
//! Both ways of obtaining an icon-font bundle end in [`generate`]: a bundle
//! downloaded by hand from the icon-font site (`manual`) or one returned by
//! the conversion service (`auto`, see [`crate::convert`]).

use std::path::{Path, PathBuf};

use crate::config::PathSettings;
use crate::convert::EXTRACT_DIR_NAME;
use crate::error::{Error, Result};
use crate::relocate::relocate_font;
use crate::resource::ResourceDocument;
use crate::stylesheet::parse_stylesheet;
use crate::topic::Topic;

/// Stylesheet name inside a hand-downloaded bundle
pub const BUNDLE_STYLESHEET: &str = "style.css";
/// Font path inside a hand-downloaded bundle
pub const BUNDLE_FONT: &str = "fonts/icomoon.ttf";
/// Stylesheet name inside the conversion service's result
pub const CONVERTED_STYLESHEET: &str = "iconfont.css";
/// Font name inside the conversion service's result
pub const CONVERTED_FONT: &str = "iconfont.ttf";

/// Where a bundle's stylesheet and font live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSources {
    pub stylesheet: PathBuf,
    pub font: PathBuf,
}

impl FontSources {
    /// Sources inside a hand-downloaded bundle directory
    ///
    /// # Errors
    /// Returns [`Error::InputDirNotFound`] if `input_dir` is not a directory.
    pub fn from_bundle<P: AsRef<Path>>(input_dir: P) -> Result<Self> {
        let input_dir = input_dir.as_ref();
        if !input_dir.is_dir() {
            return Err(Error::InputDirNotFound {
                path: input_dir.to_path_buf(),
            });
        }
        Ok(Self {
            stylesheet: input_dir.join(BUNDLE_STYLESHEET),
            font: input_dir.join(BUNDLE_FONT),
        })
    }

    /// Sources inside the unpacked conversion result
    #[must_use]
    pub fn from_converted<P: AsRef<Path>>(extract_dir: P) -> Self {
        let extract_dir = extract_dir.as_ref();
        Self {
            stylesheet: extract_dir.join(CONVERTED_STYLESHEET),
            font: extract_dir.join(CONVERTED_FONT),
        }
    }
}

/// Output locations for generated files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub res_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl OutputLayout {
    #[must_use]
    pub fn resource_path(&self, topic: &Topic) -> PathBuf {
        self.res_dir.join(topic.resource_file_name())
    }
}

impl From<&PathSettings> for OutputLayout {
    fn from(paths: &PathSettings) -> Self {
        Self {
            res_dir: paths.res_dir.clone(),
            assets_dir: paths.assets_dir.clone(),
        }
    }
}

/// Directory the conversion result is unpacked to
#[must_use]
pub fn extract_dir(temp_dir: &Path) -> PathBuf {
    temp_dir.join(EXTRACT_DIR_NAME)
}

/// Summary of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub resource_path: PathBuf,
    pub font_path: PathBuf,
    pub glyph_count: usize,
    pub color_count: usize,
}

/// Parse the stylesheet, write the topic's resource document and copy its
/// font into the assets directory
///
/// # Errors
/// Returns an error if the stylesheet or font is missing, or if any file
/// cannot be written. The resource document may already be written when the
/// font copy fails.
pub fn generate(sources: &FontSources, topic: &Topic, layout: &OutputLayout) -> Result<GenerateReport> {
    let icons = parse_stylesheet(&sources.stylesheet)?;
    let glyph_count = icons.glyph_count();
    let color_count = icons.color_count();

    let resource_path = layout.resource_path(topic);
    ResourceDocument::new(topic.clone(), icons).write(&resource_path)?;

    let font_path = relocate_font(&sources.font, &layout.assets_dir, topic)?;

    Ok(GenerateReport {
        resource_path,
        font_path,
        glyph_count,
        color_count,
    })
}
