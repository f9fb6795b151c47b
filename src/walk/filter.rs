//! Eligibility filtering for visited entries

use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

use super::config::RunConfig;

/// The parts of a visited entry's metadata the filter looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryInfo {
    pub is_dir: bool,
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl EntryInfo {
    pub fn file(len: u64) -> Self {
        Self {
            is_dir: false,
            len,
            modified: None,
        }
    }

    pub fn dir() -> Self {
        Self {
            is_dir: true,
            len: 0,
            modified: None,
        }
    }

    pub fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = Some(modified);
        self
    }
}

impl From<&Metadata> for EntryInfo {
    fn from(meta: &Metadata) -> Self {
        Self {
            is_dir: meta.is_dir(),
            len: meta.len(),
            modified: meta.modified().ok(),
        }
    }
}

/// Decides whether a visited entry is skipped or handed to the actions.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    extensions: Vec<String>,
    min_size: u64,
    newer_than: Option<SystemTime>,
}

impl FileFilter {
    pub fn new(extensions: Vec<String>, min_size: u64) -> Self {
        Self {
            extensions,
            min_size,
            newer_than: None,
        }
    }

    pub fn with_newer_than(mut self, cutoff: Option<SystemTime>) -> Self {
        self.newer_than = cutoff;
        self
    }

    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(config.extensions.clone(), config.min_size).with_newer_than(config.newer_than)
    }

    /// Returns true when the entry must not be acted on.
    ///
    /// Directories and files below the size threshold are always skipped.
    /// Empty strings in the extension list place no constraint; if every
    /// entry is empty the list behaves as if it were absent.
    pub fn should_skip(&self, path: &Path, info: &EntryInfo) -> bool {
        if info.is_dir || info.len < self.min_size {
            return true;
        }

        if let (Some(cutoff), Some(mtime)) = (self.newer_than, info.modified) {
            if mtime < cutoff {
                return true;
            }
        }

        let ext = dotted_extension(path);
        let mut restricted = false;
        for accepted in self.extensions.iter().filter(|e| !e.is_empty()) {
            restricted = true;
            if ext == Some(accepted.as_bytes()) {
                return false;
            }
        }
        restricted
    }
}

/// Extension of the base name from its last dot, dot included, as raw bytes.
///
/// `notes.log` gives `.log`, `.bashrc` gives `.bashrc`, `Makefile` gives nothing.
/// Names that are not valid UTF-8 still have an extension.
pub fn dotted_extension(path: &Path) -> Option<&[u8]> {
    let name = path.file_name()?.as_encoded_bytes();
    name.iter().rposition(|&b| b == b'.').map(|i| &name[i..])
}
