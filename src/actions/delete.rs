//! Deletion action and its log

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::error::{Error, Result};

pub const DELETED_PREFIX: &str = "DELETED FILE: ";
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Record of successful deletions, one line per file:
/// `DELETED FILE: 2024/01/31 09:15:00 path/to/file`.
pub struct DeletionLog<W: Write> {
    writer: W,
}

impl DeletionLog<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> DeletionLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn record(&mut self, path: &Path) -> io::Result<()> {
        writeln!(
            self.writer,
            "{}{} {}",
            DELETED_PREFIX,
            Local::now().format(TIMESTAMP_FORMAT),
            path.display()
        )?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Remove the file at `path`; only a successful removal is logged.
pub fn delete_file<W: Write>(path: &Path, log: &mut DeletionLog<W>) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::io("delete", path, e))?;
    log.record(path).map_err(|e| Error::io("log deletion of", path, e))
}
