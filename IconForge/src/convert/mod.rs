//! Remote SVG-to-font conversion
//!
//! Packs a topic's SVG sources, sends them to a conversion service and
//! unpacks the returned icon-font bundle into a scratch directory.

mod archive;
mod upload;

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;

pub use archive::{extract_archive, zip_svg_sources};
pub use upload::{CONVERTED_ARCHIVE_NAME, upload_archive};

/// Sub-directory of the temp directory the conversion result is unpacked to
pub const EXTRACT_DIR_NAME: &str = "iconfont";

/// Remove a scratch directory and everything below it
///
/// A directory that does not exist is left alone.
///
/// # Errors
/// Returns an IO error if removal fails for any other reason.
pub fn clean_temp_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    match fs::remove_dir_all(dir) {
        Ok(()) => {
            tracing::info!("Removed temp directory {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
