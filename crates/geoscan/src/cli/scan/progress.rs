//! Spinner shown on stderr while a root is being walked.

use std::path::Path;
use std::time::Duration;

use geoscan_core::pipeline::EntryKind;
use geoscan_core::{ExtractError, ImageRecord, ScanObserver};
use indicatif::{ProgressBar, ProgressStyle};

/// Refresh the message every this many entries.
const MESSAGE_EVERY: u64 = 64;

/// Counts walk events and mirrors them on a spinner.
pub struct ScanProgress {
    bar: ProgressBar,
    entries: u64,
    records: u64,
    skipped: u64,
}

impl ScanProgress {
    /// Create a spinner for `root`. Hidden when disabled or stderr is not a terminal.
    pub fn new(root: &Path, enabled: bool) -> Self {
        let bar = if enabled && console::Term::stderr().is_term() {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {prefix} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_prefix(root.display().to_string());
        bar.set_message("starting...");

        Self {
            bar,
            entries: 0,
            records: 0,
            skipped: 0,
        }
    }

    fn message(&self) -> String {
        format!(
            "{} entries, {} geotagged, {} skipped",
            self.entries, self.records, self.skipped
        )
    }

    /// Clear the spinner so the summary line prints cleanly.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ScanObserver for ScanProgress {
    fn entry(&mut self, _path: &Path, _kind: EntryKind) {
        self.entries += 1;
        if self.entries % MESSAGE_EVERY == 0 {
            self.bar.set_message(self.message());
        }
    }

    fn record(&mut self, _record: &ImageRecord) {
        self.records += 1;
        self.bar.set_message(self.message());
    }

    fn skipped(&mut self, _error: &ExtractError) {
        self.skipped += 1;
        self.bar.set_message(self.message());
    }
}
