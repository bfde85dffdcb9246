//! Scan pipeline components.
//!
//! This module contains every stage of a scan:
//! - **classify**: Decide which entries are candidate images
//! - **walker**: Depth-first directory traversal
//! - **metadata**: Decode EXIF blocks and extract GPS coordinates
//! - **accumulator**: Ordered record collection
//! - **scanner**: Orchestrates a scan per root directory

pub mod accumulator;
pub mod classify;
pub mod metadata;
pub mod scanner;
pub mod walker;

// Re-exports for convenient access
pub use accumulator::RecordAccumulator;
pub use classify::ImageClassifier;
pub use metadata::{ExifDecoder, ExifError, MetadataDecoder};
pub use scanner::{ScanObserver, ScanOptions, Scanner};
pub use walker::{DirectoryWalker, EntryKind, Visitor};
