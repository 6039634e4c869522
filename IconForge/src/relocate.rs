//! Font asset relocation

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::topic::Topic;

/// Copy a generated font to `<assets_dir>/<topic>.ttf`
///
/// An existing font for the topic is removed first. Returns the destination
/// path.
///
/// # Errors
/// Returns [`Error::FontNotFound`] if `font` does not exist, or an IO error
/// if the copy fails.
pub fn relocate_font<P: AsRef<Path>, Q: AsRef<Path>>(
    font: P,
    assets_dir: Q,
    topic: &Topic,
) -> Result<PathBuf> {
    let font = font.as_ref();
    let assets_dir = assets_dir.as_ref();

    if !font.is_file() {
        return Err(Error::FontNotFound {
            path: font.to_path_buf(),
        });
    }

    let dest = assets_dir.join(topic.font_file_name());
    if dest.exists() {
        fs::remove_file(&dest)?;
    }
    fs::create_dir_all(assets_dir)?;
    fs::copy(font, &dest)?;

    tracing::info!("Copied {} to {}", font.display(), dest.display());
    Ok(dest)
}
