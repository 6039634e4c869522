//! # IconForge
//!
//! Build-time asset pipeline for icon fonts: turns the stylesheet emitted by
//! an icon-font generator (icomoon and compatible services) into an Android
//! resource document and drops the font binary into the module's assets.
//!
//! ## Quick Start
//!
//! ### From a downloaded bundle
//!
//! ```no_run
//! use iconforge::prelude::*;
//!
//! let topic = Topic::new("feed")?;
//! let sources = FontSources::from_bundle("downloads/icomoon")?;
//! let layout = OutputLayout::from(&ProjectConfig::default().paths);
//!
//! let report = generate(&sources, &topic, &layout)?;
//! println!("{} glyphs -> {}", report.glyph_count, report.resource_path.display());
//! # Ok::<(), iconforge::Error>(())
//! ```
//!
//! ### Parsing only
//!
//! ```
//! use iconforge::stylesheet::parse_stylesheet_str;
//!
//! let icons = parse_stylesheet_str(".icon-home:before {\n  content: \"\\e901\";\n}\n");
//! assert_eq!(icons.glyph("home"), Some("e901"));
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `iconforge` command-line binary

pub mod config;
pub mod convert;
pub mod error;
pub mod pipeline;
pub mod relocate;
pub mod resource;
pub mod stylesheet;
pub mod topic;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::ProjectConfig;
    pub use crate::convert::{clean_temp_dir, extract_archive, upload_archive, zip_svg_sources};
    pub use crate::error::{Error, Result};
    pub use crate::pipeline::{FontSources, GenerateReport, OutputLayout, extract_dir, generate};
    pub use crate::relocate::relocate_font;
    pub use crate::resource::ResourceDocument;
    pub use crate::stylesheet::{IconMap, parse_stylesheet, parse_stylesheet_str};
    pub use crate::topic::Topic;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
