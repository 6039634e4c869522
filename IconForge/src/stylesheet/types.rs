//! Type definitions for parsed stylesheet data

use std::collections::BTreeMap;

/// Suffix appended to an icon name to form its color key
pub const COLOR_KEY_SUFFIX: &str = "_color";

/// One glyph mapping: icon name -> 4-hex-digit code point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconEntry<'a> {
    pub name: &'a str,
    pub glyph_code: &'a str,
}

/// One color mapping: `<name>_color` -> `#rgb`..`#rrggbbaa`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorEntry<'a> {
    pub key: &'a str,
    pub color_value: &'a str,
}

/// Glyph and color mappings collected from one stylesheet
///
/// Both maps are ordered, so iteration is ascending by key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconMap {
    glyphs: BTreeMap<String, String>,
    colors: BTreeMap<String, String>,
}

impl IconMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name -> code`, returning the code it replaced (if any)
    pub fn insert_glyph(&mut self, name: &str, code: &str) -> Option<String> {
        self.glyphs.insert(name.to_string(), code.to_string())
    }

    /// Record `<name>_color -> value`, returning the value it replaced (if any)
    pub fn insert_color(&mut self, name: &str, value: &str) -> Option<String> {
        self.colors.insert(color_key(name), value.to_string())
    }

    /// Glyph code for an icon name
    #[must_use]
    pub fn glyph(&self, name: &str) -> Option<&str> {
        self.glyphs.get(name).map(String::as_str)
    }

    /// Color for an icon name (looked up under `<name>_color`)
    #[must_use]
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(&color_key(name)).map(String::as_str)
    }

    /// Glyph entries, ascending by icon name
    pub fn icons(&self) -> impl Iterator<Item = IconEntry<'_>> {
        self.glyphs.iter().map(|(name, code)| IconEntry {
            name,
            glyph_code: code,
        })
    }

    /// Color entries, ascending by color key
    pub fn color_entries(&self) -> impl Iterator<Item = ColorEntry<'_>> {
        self.colors.iter().map(|(key, value)| ColorEntry {
            key,
            color_value: value,
        })
    }

    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty() && self.colors.is_empty()
    }
}

/// Color key for an icon name
#[must_use]
pub fn color_key(name: &str) -> String {
    format!("{name}{COLOR_KEY_SUFFIX}")
}
