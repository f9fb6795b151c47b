//! walkclean - walk a directory tree and list, delete, or gzip-archive matching files

pub mod actions;
pub mod error;
pub mod utils;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use actions::{DeletionLog, archive_file, delete_file, list_file};
pub use error::{Error, Result};
pub use walk::{Action, ActionPlan, EntryInfo, FileFilter, Pipeline, RunConfig, run};
