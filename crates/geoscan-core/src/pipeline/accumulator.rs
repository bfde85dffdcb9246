//! Ordered in-memory record collection for a single scan.

use crate::types::ImageRecord;

/// Records in the order the walk produced them.
///
/// No deduplication and no size bound. Owned by one scan at a time.
#[derive(Debug, Default)]
pub struct RecordAccumulator {
    records: Vec<ImageRecord>,
}

impl RecordAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: ImageRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<ImageRecord> {
        self.records
    }
}
