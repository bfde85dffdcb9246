//! Depth-first directory traversal with an abort-on-error visitor.

use std::path::Path;
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::{PipelineError, PipelineResult};

/// Kind of a walked filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

impl EntryKind {
    fn from_file_type(file_type: std::fs::FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else if file_type.is_symlink() {
            Self::Symlink
        } else {
            Self::Other
        }
    }
}

/// Receives every entry of a walk.
///
/// Returning an error stops the walk and hands that error to the caller, so
/// per-file problems must be handled inside `visit`.
pub trait Visitor {
    fn visit(&mut self, path: &Path, kind: EntryKind) -> PipelineResult<()>;
}

impl<F> Visitor for F
where
    F: FnMut(&Path, EntryKind) -> PipelineResult<()>,
{
    fn visit(&mut self, path: &Path, kind: EntryKind) -> PipelineResult<()> {
        self(path, kind)
    }
}

/// Walks a directory tree, visiting entries in file-name order.
#[derive(Debug, Clone, Default)]
pub struct DirectoryWalker {
    follow_links: bool,
}

impl DirectoryWalker {
    /// Create a walker from the scan configuration.
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            follow_links: config.follow_links,
        }
    }

    /// Check that `root` is a directory that can be listed.
    pub fn check_root(root: &Path) -> PipelineResult<()> {
        let meta = std::fs::metadata(root).map_err(|e| PipelineError::Traversal {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if !meta.is_dir() {
            return Err(PipelineError::Traversal {
                path: root.to_path_buf(),
                message: "not a directory".to_string(),
            });
        }
        std::fs::read_dir(root).map_err(|e| PipelineError::Traversal {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Visit every entry under `root`, the root itself first.
    ///
    /// Stops at the first read error or visitor error.
    pub fn walk<V: Visitor + ?Sized>(&self, root: &Path, visitor: &mut V) -> PipelineResult<()> {
        Self::check_root(root)?;

        let walk = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        for entry in walk {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                let message = match e.io_error() {
                    Some(io) => io.to_string(),
                    None => e.to_string(),
                };
                PipelineError::Traversal { path, message }
            })?;
            visitor.visit(entry.path(), EntryKind::from_file_type(entry.file_type()))?;
        }

        Ok(())
    }
}
