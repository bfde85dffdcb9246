//! Geoscan Core - find geotagged images and report their coordinates.
//!
//! Geoscan walks a directory tree, reads the EXIF block of every file with an
//! image extension, and writes the GPS coordinates it finds to a CSV report
//! and optionally an HTML page inside the scanned directory.
//!
//! # Architecture
//!
//! ```text
//! Walk → Classify → Decode EXIF → Extract lat/long → CSV row (streamed)
//!                                                   → Accumulate → HTML page
//! ```
//!
//! Files that cannot be opened or decoded, or that carry no GPS tags, are
//! logged and skipped. Only output-file and traversal errors stop a scan.
//!
//! # Usage
//!
//! ```rust,no_run
//! use geoscan_core::{Config, ScanOptions, Scanner};
//! use std::path::Path;
//!
//! let config = Config::load()?;
//! let scanner = Scanner::new(&config);
//! match scanner.scan(Path::new("./photos"), &ScanOptions::default()) {
//!     Ok(result) => println!("{} geotagged images", result.records.len()),
//!     Err(failure) => eprintln!("scan stopped: {failure}"),
//! }
//! # Ok::<(), geoscan_core::ConfigError>(())
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{
    ConfigError, ExtractError, GeoscanError, PipelineError, PipelineResult, Result, ScanFailure,
};
pub use output::{CsvSink, HtmlSink};
pub use pipeline::{ScanObserver, ScanOptions, Scanner};
pub use types::{Coordinates, ImageRecord, ScanResult, ScanStats};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
