//! Upload to the SVG-to-font conversion endpoint

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::blocking::{Client, multipart::Form};

use crate::error::{Error, Result};

/// File name the conversion result is saved under inside the temp directory
pub const CONVERTED_ARCHIVE_NAME: &str = "iconfont.zip";

/// Multipart field name the endpoint expects the archive in
const UPLOAD_FIELD: &str = "file";

/// POST `zip_path` to `endpoint` and save the returned archive
///
/// The response body is written to `<temp_dir>/iconfont.zip`, replacing any
/// previous download. Returns that path. The request has no timeout: the
/// conversion can take arbitrarily long and the call blocks until it answers.
///
/// # Errors
/// Returns [`Error::Http`] if the request fails in transit,
/// [`Error::ConversionFailed`] on a non-success status, or an IO error if
/// the archive cannot be read or the result cannot be saved.
pub fn upload_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    zip_path: P,
    endpoint: &str,
    temp_dir: Q,
) -> Result<PathBuf> {
    let zip_path = zip_path.as_ref();
    let temp_dir = temp_dir.as_ref();

    tracing::info!("Uploading {} to {endpoint}", zip_path.display());
    let form = Form::new().file(UPLOAD_FIELD, zip_path)?;
    // reqwest's blocking client gives up after 30s unless told otherwise
    let client = Client::builder().timeout(None).build()?;
    let response = client.post(endpoint).multipart(form).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::ConversionFailed {
            status: status.as_u16(),
        });
    }
    let body = response.bytes()?;

    fs::create_dir_all(temp_dir)?;
    let dest = temp_dir.join(CONVERTED_ARCHIVE_NAME);
    if dest.exists() {
        fs::remove_file(&dest)?;
    }
    fs::write(&dest, &body)?;

    tracing::info!("Saved {} bytes to {}", body.len(), dest.display());
    Ok(dest)
}
