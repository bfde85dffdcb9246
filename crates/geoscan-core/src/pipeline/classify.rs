//! Extension-based image classification.

use std::path::Path;

use crate::config::ScanConfig;

use super::walker::EntryKind;

/// Decides which walked entries are candidate images.
///
/// Matching is a case-sensitive suffix test on the file name. File contents
/// are never inspected; a mislabeled file is caught later by the decoder.
#[derive(Debug, Clone)]
pub struct ImageClassifier {
    extensions: Vec<String>,
}

impl ImageClassifier {
    /// Create a classifier for the given suffixes (e.g. `".jpg"`).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a classifier from the scan configuration.
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.extensions.iter().cloned())
    }

    /// Check whether an entry name carries an image suffix.
    pub fn is_image(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    /// Classify a walked entry. Directories never count as images.
    pub fn classify(&self, path: &Path, kind: EntryKind) -> bool {
        if kind == EntryKind::Directory {
            return false;
        }
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.is_image(name))
    }
}

impl Default for ImageClassifier {
    fn default() -> Self {
        Self::from_config(&ScanConfig::default())
    }
}
