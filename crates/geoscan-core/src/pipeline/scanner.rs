//! Scan orchestration - wires the walker, decoder and report sinks together.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::{Config, OutputConfig};
use crate::error::{ExtractError, PipelineError, PipelineResult, ScanFailure};
use crate::output::{CsvSink, HtmlSink};
use crate::types::{ImageRecord, ScanResult, ScanStats};

use super::accumulator::RecordAccumulator;
use super::classify::ImageClassifier;
use super::metadata::{ExifDecoder, MetadataDecoder};
use super::walker::{DirectoryWalker, EntryKind, Visitor};

/// Which reports to produce for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub write_csv: bool,
    pub write_html: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            write_csv: true,
            write_html: false,
        }
    }
}

impl ScanOptions {
    /// Options taken from the `[output]` config section.
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            write_csv: config.csv,
            write_html: config.html,
        }
    }

    fn validate(&self) -> PipelineResult<()> {
        if !self.write_csv && !self.write_html {
            return Err(PipelineError::NoOutput);
        }
        Ok(())
    }
}

/// Progress hooks called while a scan runs. All methods default to no-ops.
pub trait ScanObserver {
    /// Called for every walked entry.
    fn entry(&mut self, _path: &Path, _kind: EntryKind) {}

    /// Called after a record has been written and accumulated.
    fn record(&mut self, _record: &ImageRecord) {}

    /// Called when a candidate image is skipped.
    fn skipped(&mut self, _error: &ExtractError) {}
}

impl ScanObserver for () {}

/// Scans root directories for geotagged images and writes the reports.
pub struct Scanner<D = ExifDecoder> {
    classifier: ImageClassifier,
    walker: DirectoryWalker,
    decoder: D,
    csv_file_name: String,
    html_file_name: String,
}

impl Scanner<ExifDecoder> {
    /// Create a scanner that reads EXIF metadata.
    pub fn new(config: &Config) -> Self {
        Self::with_decoder(config, ExifDecoder)
    }
}

impl<D: MetadataDecoder> Scanner<D> {
    /// Create a scanner with a custom metadata decoder.
    pub fn with_decoder(config: &Config, decoder: D) -> Self {
        Self {
            classifier: ImageClassifier::from_config(&config.scan),
            walker: DirectoryWalker::new(&config.scan),
            decoder,
            csv_file_name: config.output.csv_file_name.clone(),
            html_file_name: config.output.html_file_name.clone(),
        }
    }

    /// Scan one root directory.
    ///
    /// On failure the returned [`ScanFailure`] carries the partial result:
    /// `csv_path` is set if the CSV report was created before the error, and
    /// `html_path` is never set because HTML is only written after a
    /// complete walk.
    pub fn scan(&self, root: &Path, options: &ScanOptions) -> Result<ScanResult, ScanFailure> {
        self.scan_observed(root, options, &mut ())
    }

    /// Scan one root directory, reporting progress to `observer`.
    pub fn scan_observed<O: ScanObserver + ?Sized>(
        &self,
        root: &Path,
        options: &ScanOptions,
        observer: &mut O,
    ) -> Result<ScanResult, ScanFailure> {
        let mut result = ScanResult::new(root);

        if let Err(e) = options
            .validate()
            .and_then(|()| DirectoryWalker::check_root(root))
        {
            return Err(ScanFailure::new(result, e));
        }

        let start = std::time::Instant::now();
        tracing::debug!("Scanning {:?}", root);

        let mut csv = None;
        if options.write_csv {
            let csv_path = root.join(&self.csv_file_name);
            match CsvSink::create(&csv_path) {
                Ok(sink) => {
                    csv = Some(sink);
                    result.csv_path = Some(csv_path);
                }
                Err(e) => {
                    tracing::error!("{}: Error creating output file: {}", root.display(), e);
                    return Err(ScanFailure::new(result, e));
                }
            }
        }

        let mut accumulator = RecordAccumulator::new();
        let mut visitor = ScanVisitor {
            classifier: &self.classifier,
            decoder: &self.decoder,
            csv: csv.as_mut(),
            accumulator: &mut accumulator,
            stats: &mut result.stats,
            observer,
        };
        let walked = self.walker.walk(root, &mut visitor);

        let flushed = match csv {
            Some(sink) => {
                let rows = sink.rows_written();
                sink.finish()
                    .map(|_| tracing::debug!("Wrote {} CSV rows to {:?}", rows, result.csv_path))
            }
            None => Ok(()),
        };
        result.records = accumulator.into_records();

        if let Err(e) = walked.and(flushed) {
            tracing::error!("{}: Error iterating directory: {}", root.display(), e);
            return Err(ScanFailure::new(result, e));
        }

        if options.write_html {
            let html_path = root.join(&self.html_file_name);
            if let Err(e) = HtmlSink::write(&html_path, &result.records) {
                tracing::error!("{}: Error generating html file: {}", root.display(), e);
                return Err(ScanFailure::new(result, e));
            }
            result.html_path = Some(html_path);
        }

        tracing::info!(
            "Scanned {:?}: {} records, {} skipped, {} entries in {:?}",
            root,
            result.records.len(),
            result.stats.skipped,
            result.stats.entries_visited,
            start.elapsed()
        );

        Ok(result)
    }

    /// Scan several roots one after another. Each scan is independent.
    pub fn scan_all<P: AsRef<Path>>(
        &self,
        roots: &[P],
        options: &ScanOptions,
    ) -> Vec<Result<ScanResult, ScanFailure>> {
        roots
            .iter()
            .map(|root| self.scan(root.as_ref(), options))
            .collect()
    }
}

/// Per-scan state lent to the walker.
struct ScanVisitor<'a, D, O: ?Sized> {
    classifier: &'a ImageClassifier,
    decoder: &'a D,
    csv: Option<&'a mut CsvSink>,
    accumulator: &'a mut RecordAccumulator,
    stats: &'a mut ScanStats,
    observer: &'a mut O,
}

impl<D: MetadataDecoder, O: ScanObserver + ?Sized> Visitor for ScanVisitor<'_, D, O> {
    fn visit(&mut self, path: &Path, kind: EntryKind) -> PipelineResult<()> {
        self.stats.entries_visited += 1;
        self.observer.entry(path, kind);

        if !self.classifier.classify(path, kind) {
            return Ok(());
        }
        self.stats.candidates += 1;

        let record = match extract(self.decoder, path) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("{}", e);
                self.stats.skipped += 1;
                self.observer.skipped(&e);
                return Ok(());
            }
        };

        if let Some(csv) = self.csv.as_deref_mut() {
            csv.write(&record)?;
        }
        self.observer.record(&record);
        self.accumulator.append(record);
        Ok(())
    }
}

/// Open, decode and extract one candidate file.
fn extract<D: MetadataDecoder>(decoder: &D, path: &Path) -> Result<ImageRecord, ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let metadata = decoder
        .decode(&mut reader)
        .map_err(|e| ExtractError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let coordinates = decoder
        .coordinates(&metadata)
        .map_err(|e| ExtractError::Coordinates {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(ImageRecord::new(path, coordinates))
}
