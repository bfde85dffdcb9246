//! Error types for the Geoscan pipeline.
//!
//! Errors are split by how far they reach: per-file [`ExtractError`]s are
//! absorbed inside the walk, while [`PipelineError`]s end the scan of a root.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::ScanResult;

/// Top-level error type for Geoscan operations.
#[derive(Error, Debug)]
pub enum GeoscanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scan pipeline errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors that end the scan of one root directory.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Neither CSV nor HTML output was requested
    #[error("no output format requested")]
    NoOutput,

    /// An output file could not be created or written
    #[error("Cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory walk failed
    #[error("Error walking {path}: {message}")]
    Traversal { path: PathBuf, message: String },
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Per-file failures. These are logged and the file is skipped.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The candidate image could not be opened
    #[error("Cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata block was missing or corrupt
    #[error("Error decoding EXIF data for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// The metadata decoded but carried no usable coordinates
    #[error("Error getting latitude and longitude for {path}: {message}")]
    Coordinates { path: PathBuf, message: String },
}

impl ExtractError {
    /// Path of the file that was skipped.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. } | Self::Decode { path, .. } | Self::Coordinates { path, .. } => {
                path
            }
        }
    }
}

/// A scan that ended early, with whatever it produced before the error.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct ScanFailure {
    /// Partial result; `csv_path`/`html_path` are set only for files that exist
    pub result: Box<ScanResult>,
    /// The error that stopped the scan
    pub error: PipelineError,
}

impl ScanFailure {
    pub(crate) fn new(result: ScanResult, error: PipelineError) -> Self {
        Self {
            result: Box::new(result),
            error,
        }
    }

    /// True if at least one output file was written before the failure.
    pub fn is_partial(&self) -> bool {
        self.result.has_output()
    }
}

/// Convenience type alias for Geoscan results.
pub type Result<T> = std::result::Result<T, GeoscanError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_output_message() {
        assert_eq!(
            PipelineError::NoOutput.to_string(),
            "no output format requested"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let err = PipelineError::io(
            "/photos/lat_long.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/photos/lat_long.csv"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_extract_error_path() {
        let err = ExtractError::Decode {
            path: PathBuf::from("a.jpg"),
            message: "no exif".into(),
        };
        assert_eq!(err.path(), std::path::Path::new("a.jpg"));
    }

    #[test]
    fn test_scan_failure_partial() {
        let mut result = ScanResult::new(PathBuf::from("/photos"));
        let failure = ScanFailure::new(result.clone(), PipelineError::NoOutput);
        assert!(!failure.is_partial());

        result.csv_path = Some(PathBuf::from("/photos/lat_long.csv"));
        let failure = ScanFailure::new(result, PipelineError::NoOutput);
        assert!(failure.is_partial());
        assert_eq!(failure.to_string(), "no output format requested");
    }
}
