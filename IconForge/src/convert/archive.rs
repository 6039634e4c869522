//! ZIP packaging of SVG sources and extraction of conversion results

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Error, Result};
use crate::topic::Topic;

fn is_svg(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Archive entry name for a file below `base`, with forward slashes
///
/// Only normal components are kept, so `./` and root prefixes never reach
/// the archive.
fn entry_name(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Zip every SVG under `<svg_root>/<topic>` into `<temp_dir>/<topic>.zip`
///
/// Entries are named from the directory holding `svg_root` down, so the root
/// directory's own name leads (`svg-icons/feed/home.svg`). An existing
/// archive is replaced. Returns the archive path.
///
/// # Errors
/// Returns [`Error::EmptySourceDir`] if the topic directory is missing or
/// holds no SVG files, or an IO/ZIP error if writing fails.
pub fn zip_svg_sources<P: AsRef<Path>, Q: AsRef<Path>>(
    svg_root: P,
    topic: &Topic,
    temp_dir: Q,
) -> Result<PathBuf> {
    let svg_root = svg_root.as_ref();
    let temp_dir = temp_dir.as_ref();
    let source_dir = svg_root.join(topic.as_str());

    let svgs: Vec<PathBuf> = if source_dir.is_dir() {
        WalkDir::new(&source_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(e) if e.file_type().is_file() && is_svg(e.path()) => {
                    Some(Ok(e.into_path()))
                }
                Ok(_) => None,
                Err(err) => Some(Err(Error::from(err))),
            })
            .collect::<Result<_>>()?
    } else {
        Vec::new()
    };

    if svgs.is_empty() {
        return Err(Error::EmptySourceDir { path: source_dir });
    }

    fs::create_dir_all(temp_dir)?;
    let zip_path = temp_dir.join(format!("{topic}.zip"));
    if zip_path.exists() {
        fs::remove_file(&zip_path)?;
    }

    let entry_base = svg_root.parent().unwrap_or_else(|| Path::new(""));
    let mut zip = ZipWriter::new(BufWriter::new(File::create(&zip_path)?));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for svg in &svgs {
        zip.start_file(entry_name(svg, entry_base), options)?;
        let mut src = File::open(svg)?;
        io::copy(&mut src, &mut zip)?;
    }
    zip.finish()?.flush()?;

    tracing::info!("Packed {} SVG files into {}", svgs.len(), zip_path.display());
    Ok(zip_path)
}

/// Extract every entry of `zip_path` into `out_dir`
///
/// Returns `out_dir`.
///
/// # Errors
/// Returns [`Error::UnsafeArchivePath`] for entries that would land outside
/// `out_dir`, or an IO/ZIP error if reading or writing fails.
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(zip_path: P, out_dir: Q) -> Result<PathBuf> {
    let zip_path = zip_path.as_ref();
    let out_dir = out_dir.as_ref();

    let mut archive = ZipArchive::new(BufReader::new(File::open(zip_path)?))?;
    fs::create_dir_all(out_dir)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(Error::UnsafeArchivePath {
                name: entry.name().to_string(),
            });
        };
        let dest = out_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&dest)?;
            continue;
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(&dest)?);
        io::copy(&mut entry, &mut out)?;
        out.flush()?;
    }

    tracing::info!(
        "Extracted {} entries from {} to {}",
        archive.len(),
        zip_path.display(),
        out_dir.display()
    );
    Ok(out_dir.to_path_buf())
}
