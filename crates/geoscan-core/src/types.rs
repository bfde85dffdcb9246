//! Core data types for the Geoscan pipeline.
//!
//! These types represent what a scan produces: one record per geotagged image
//! and a per-root result describing which reports were written.

use std::path::{Path, PathBuf};

/// Signed decimal-degree coordinates. South and west are negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One image whose metadata yielded coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    /// Path as produced by the walk (the root joined with the relative path)
    pub path: PathBuf,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl ImageRecord {
    pub fn new(path: impl Into<PathBuf>, coordinates: Coordinates) -> Self {
        Self {
            path: path.into(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}

/// Counters collected during one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Every entry the walk reported, directories included
    pub entries_visited: u64,

    /// Entries that matched the image extension filter
    pub candidates: u64,

    /// Candidates excluded by an open, decode or extraction failure
    pub skipped: u64,
}

/// The outcome of scanning one root directory.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// The directory that was scanned
    pub root: PathBuf,

    /// Records in traversal order
    pub records: Vec<ImageRecord>,

    /// CSV report location, set once the file exists
    pub csv_path: Option<PathBuf>,

    /// HTML report location, set once the file is fully written
    pub html_path: Option<PathBuf>,

    /// Walk counters
    pub stats: ScanStats,
}

impl ScanResult {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            records: Vec::new(),
            csv_path: None,
            html_path: None,
            stats: ScanStats::default(),
        }
    }

    /// True if any report file was produced.
    pub fn has_output(&self) -> bool {
        self.csv_path.is_some() || self.html_path.is_some()
    }

    /// Produced report paths, CSV first.
    pub fn output_paths(&self) -> impl Iterator<Item = &Path> {
        self.csv_path
            .as_deref()
            .into_iter()
            .chain(self.html_path.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_coordinates() {
        let record = ImageRecord::new(
            "trip/a.jpg",
            Coordinates {
                latitude: 12.5,
                longitude: -3.25,
            },
        );
        assert_eq!(record.path, PathBuf::from("trip/a.jpg"));
        assert_eq!(record.latitude, 12.5);
        assert_eq!(record.longitude, -3.25);
    }

    #[test]
    fn test_output_paths_order() {
        let mut result = ScanResult::new("/photos");
        assert!(!result.has_output());
        assert_eq!(result.output_paths().count(), 0);

        result.html_path = Some(PathBuf::from("/photos/lat_long.html"));
        result.csv_path = Some(PathBuf::from("/photos/lat_long.csv"));
        let paths: Vec<_> = result.output_paths().collect();
        assert_eq!(
            paths,
            vec![
                Path::new("/photos/lat_long.csv"),
                Path::new("/photos/lat_long.html")
            ]
        );
    }
}
