//! Error types for `IconForge`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `IconForge` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Input Errors ====================
    /// The topic name cannot be used in file names.
    #[error("invalid topic '{topic}': must be non-empty and contain no whitespace or path separators")]
    InvalidTopic {
        /// The rejected topic name.
        topic: String,
    },

    /// The icon-font bundle directory does not exist.
    #[error("input directory not found: {path}")]
    InputDirNotFound {
        /// The expected bundle directory.
        path: PathBuf,
    },

    /// The generated stylesheet could not be found.
    #[error("stylesheet not found: {path}")]
    StylesheetNotFound {
        /// The expected stylesheet path.
        path: PathBuf,
    },

    /// The generated font binary could not be found.
    #[error("font file not found: {path}")]
    FontNotFound {
        /// The expected font path.
        path: PathBuf,
    },

    /// The SVG source directory for a topic is missing or empty.
    #[error("no SVG sources in {path}")]
    EmptySourceDir {
        /// The topic's SVG directory.
        path: PathBuf,
    },

    // ==================== Archive Errors ====================
    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// An archive entry would be extracted outside the output directory.
    #[error("unsafe path in archive: {name}")]
    UnsafeArchivePath {
        /// The entry name as stored in the archive.
        name: String,
    },

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),

    // ==================== Network Errors ====================
    /// The conversion endpoint could not be reached or the transfer failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The conversion endpoint answered with a non-success status.
    #[error("conversion service returned HTTP {status}")]
    ConversionFailed {
        /// The HTTP status code.
        status: u16,
    },

    // ==================== Config Errors ====================
    /// The project file is not valid TOML or has wrongly typed fields.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// An explicitly requested project file does not exist.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// The requested config path.
        path: PathBuf,
    },
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

/// A specialized Result type for `IconForge` operations.
pub type Result<T> = std::result::Result<T, Error>;
