//! Sub-configuration structs and their defaults.

use serde::{Deserialize, Serialize};

/// Traversal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File-name suffixes treated as images (case-sensitive, leading dot)
    pub extensions: Vec<String>,

    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec![
                ".jpg".to_string(),
                ".jpeg".to_string(),
                ".png".to_string(),
                ".gif".to_string(),
            ],
            follow_links: false,
        }
    }
}

/// Report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write the CSV report
    pub csv: bool,

    /// Write the HTML report
    pub html: bool,

    /// CSV file name, created inside each scanned root
    pub csv_file_name: String,

    /// HTML file name, created inside each scanned root
    pub html_file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv: true,
            html: false,
            csv_file_name: "lat_long.csv".to_string(),
            html_file_name: "lat_long.html".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
