//! Icon-font stylesheet parsing
//!
//! Extracts icon name -> glyph code and icon name -> color mappings from the
//! CSS emitted by icon-font generators (icomoon and compatible services).

mod parser;
mod types;

pub use parser::{StylesheetScanner, parse_stylesheet, parse_stylesheet_str};
pub use types::{COLOR_KEY_SUFFIX, ColorEntry, IconEntry, IconMap, color_key};
