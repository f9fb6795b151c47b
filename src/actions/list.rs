//! Listing action

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Write `path` and a newline to `out`.
pub fn list_file<W: Write + ?Sized>(path: &Path, out: &mut W) -> Result<()> {
    writeln!(out, "{}", path.display()).map_err(|e| Error::io("list", path, e))
}
