//! HTML report generator - one static page with a coordinate table.

use std::path::Path;

use crate::error::{PipelineError, PipelineResult};
use crate::types::ImageRecord;

use super::{format_coordinate, html_escape};

/// Renders the complete record set into a single page.
///
/// Unlike the CSV report this is a snapshot: it is written once, after the
/// walk has finished.
pub struct HtmlSink;

impl HtmlSink {
    /// Render the page for `records`.
    pub fn render(records: &[ImageRecord]) -> String {
        let mut rows = String::new();
        for record in records {
            rows.push_str(&format!(
                "\t\t\t<tr>\n\
                 \t\t\t\t<td>{}</td>\n\
                 \t\t\t\t<td>{}</td>\n\
                 \t\t\t\t<td>{}</td>\n\
                 \t\t\t</tr>\n",
                html_escape(&record.path.to_string_lossy()),
                format_coordinate(record.latitude),
                format_coordinate(record.longitude),
            ));
        }

        format!(include_str!("templates/report.html"), rows = rows)
    }

    /// Render and write the page to `path`, replacing any existing file.
    pub fn write(path: &Path, records: &[ImageRecord]) -> PipelineResult<()> {
        std::fs::write(path, Self::render(records)).map_err(|e| PipelineError::io(path, e))
    }
}
