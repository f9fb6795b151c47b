//! Configuration types for walk runs

use std::path::PathBuf;
use std::time::SystemTime;

/// Configuration for a single run. Built once, never mutated while walking.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Accepted extensions including the leading dot (e.g. ".log").
    /// Empty means every extension is accepted.
    pub extensions: Vec<String>,
    /// Files smaller than this many bytes are never acted on
    pub min_size: u64,
    /// Only act on files modified at or after this time
    pub newer_than: Option<SystemTime>,
    /// Report eligible files and do nothing else
    pub list_only: bool,
    pub delete: bool,
    /// Mirror eligible files as `.gz` under this directory
    pub archive_dir: Option<PathBuf>,
}
