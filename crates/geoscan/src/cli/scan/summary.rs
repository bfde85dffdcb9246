//! Per-root outcome lines printed to stdout.

use console::style;
use geoscan_core::{ScanFailure, ScanResult};

/// How a root's scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every requested report was written
    Success,
    /// The scan failed after at least one report was written
    Partial,
    /// Nothing was written
    Failed,
}

/// Classify a scan and build its summary line.
pub fn summarize(outcome: &Result<ScanResult, ScanFailure>) -> (Outcome, String) {
    match outcome {
        Ok(result) => (
            Outcome::Success,
            format!(
                "Files generated for {}: {}",
                result.root.display(),
                join_paths(result)
            ),
        ),
        Err(failure) if failure.is_partial() => (
            Outcome::Partial,
            format!(
                "Partial output for {}: {}: {}",
                failure.result.root.display(),
                join_paths(&failure.result),
                failure.error
            ),
        ),
        Err(failure) => (
            Outcome::Failed,
            format!(
                "File generation failed for {}: {}",
                failure.result.root.display(),
                failure.error
            ),
        ),
    }
}

/// Print the summary line for one root and return its outcome.
pub fn print_summary(outcome: &Result<ScanResult, ScanFailure>) -> Outcome {
    let (kind, line) = summarize(outcome);
    let marker = match kind {
        Outcome::Success => style("✓").green(),
        Outcome::Partial => style("!").yellow(),
        Outcome::Failed => style("✗").red(),
    };
    println!("{marker} {line}");
    kind
}

fn join_paths(result: &ScanResult) -> String {
    result
        .output_paths()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoscan_core::PipelineError;
    use std::path::PathBuf;

    fn result() -> ScanResult {
        let mut result = ScanResult::new("/photos");
        result.csv_path = Some(PathBuf::from("/photos/lat_long.csv"));
        result
    }

    fn failure(result: ScanResult, error: PipelineError) -> Result<ScanResult, ScanFailure> {
        Err(ScanFailure {
            result: Box::new(result),
            error,
        })
    }

    #[test]
    fn test_success_line() {
        let mut ok = result();
        ok.html_path = Some(PathBuf::from("/photos/lat_long.html"));
        let (kind, line) = summarize(&Ok(ok));
        assert_eq!(kind, Outcome::Success);
        assert_eq!(
            line,
            "Files generated for /photos: /photos/lat_long.csv,/photos/lat_long.html"
        );
    }

    #[test]
    fn test_partial_line_includes_error() {
        let outcome = failure(
            result(),
            PipelineError::Traversal {
                path: PathBuf::from("/photos/locked"),
                message: "Permission denied".into(),
            },
        );
        let (kind, line) = summarize(&outcome);
        assert_eq!(kind, Outcome::Partial);
        assert!(line.starts_with("Partial output for /photos: /photos/lat_long.csv: "));
        assert!(line.contains("/photos/locked"));
        assert!(line.contains("Permission denied"));
    }

    #[test]
    fn test_failed_line() {
        let outcome = failure(ScanResult::new("/photos"), PipelineError::NoOutput);
        let (kind, line) = summarize(&outcome);
        assert_eq!(kind, Outcome::Failed);
        assert_eq!(
            line,
            "File generation failed for /photos: no output format requested"
        );
    }
}
