//! Report sinks for scan results.
//!
//! - **csv_sink**: streams one row per record while the walk runs
//! - **html_sink**: renders a single page from the finished record set
//!
//! Both render coordinates with [`format_coordinate`] so the two reports agree.

pub mod csv_sink;
pub mod html_sink;

pub use csv_sink::CsvSink;
pub use html_sink::HtmlSink;

/// Fixed-point decimal with six fractional digits, e.g. `-98.765432`.
pub fn format_coordinate(value: f64) -> String {
    format!("{value:.6}")
}

/// HTML escape a string for safe inclusion in HTML.
pub fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
