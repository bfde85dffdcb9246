//! Streaming CSV report.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, PipelineResult};
use crate::types::ImageRecord;

use super::format_coordinate;

/// Header row of the CSV report.
pub const CSV_HEADER: [&str; 3] = ["File Path", "Latitude", "Longitude"];

/// Writes the header up front, then one row per record as records arrive.
///
/// If a scan stops early, [`CsvSink::finish`] still leaves a valid file: the
/// header plus every row written so far.
pub struct CsvSink<W: Write = File> {
    writer: csv::Writer<W>,
    path: PathBuf,
    rows_written: usize,
}

impl CsvSink<File> {
    /// Create (or truncate) the report file and write the header.
    pub fn create(path: &Path) -> PipelineResult<Self> {
        let file = File::create(path).map_err(|e| PipelineError::io(path, e))?;
        Self::new(file, path)
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap a writer and emit the header. `path` is only used in errors.
    pub fn new(writer: W, path: impl Into<PathBuf>) -> PipelineResult<Self> {
        let mut sink = Self {
            writer: csv::Writer::from_writer(writer),
            path: path.into(),
            rows_written: 0,
        };
        sink.writer
            .write_record(CSV_HEADER)
            .map_err(|e| PipelineError::io(&sink.path, io::Error::from(e)))?;
        Ok(sink)
    }

    /// Append one record.
    pub fn write(&mut self, record: &ImageRecord) -> PipelineResult<()> {
        let path = record.path.to_string_lossy();
        self.writer
            .write_record([
                &*path,
                format_coordinate(record.latitude).as_str(),
                format_coordinate(record.longitude).as_str(),
            ])
            .map_err(|e| PipelineError::io(&self.path, io::Error::from(e)))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of data rows written (header excluded).
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Report file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and return the underlying writer.
    pub fn finish(self) -> PipelineResult<W> {
        let path = self.path;
        self.writer
            .into_inner()
            .map_err(|e| PipelineError::io(path, io::Error::new(e.error().kind(), e.to_string())))
    }
}
