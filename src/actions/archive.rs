//! Gzip archiving into a mirrored directory tree

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use flate2::{Compression, GzBuilder};
use tracing::debug;

use crate::error::{Error, Result};
use crate::utils::format_size;

/// Where `path` lands under `dest_dir`: the directory of `path` relative to
/// `root`, then the base name with `.gz` appended.
pub fn archive_target(path: &Path, root: &Path, dest_dir: &Path) -> PathBuf {
    // A root that is itself a file has no parent under root
    let rel_dir = path
        .parent()
        .and_then(|parent| parent.strip_prefix(root).ok())
        .unwrap_or_else(|| Path::new(""));

    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".gz");
    dest_dir.join(rel_dir).join(name)
}

/// Compress `path` into the mirror of `root` under `dest_dir`.
///
/// A missing destination disables archiving and returns `Ok`. An existing
/// target is overwritten in place; a failure mid-stream can leave it
/// partially written.
pub fn archive_file(path: &Path, root: &Path, dest_dir: &Path) -> Result<()> {
    let dest_meta = match fs::metadata(dest_dir) {
        Ok(meta) => meta,
        Err(_) => {
            debug!(dest = %dest_dir.display(), "archive destination missing, skipping");
            return Ok(());
        }
    };
    if !dest_meta.is_dir() {
        return Err(Error::NotADirectory(dest_dir.to_path_buf()));
    }

    let target = archive_target(path, root, dest_dir);
    if let Some(parent) = target.parent() {
        create_dirs(parent).map_err(|e| Error::io("create directory", parent, e))?;
    }

    let out = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(&target)
        .map_err(|e| Error::io("create", &target, e))?;
    let mut input = File::open(path).map_err(|e| Error::io("open", path, e))?;

    let base_name = path.file_name().unwrap_or_default().to_string_lossy();
    let mut encoder = GzBuilder::new()
        .filename(base_name.as_bytes())
        .write(out, Compression::default());

    let copied = io::copy(&mut input, &mut encoder).map_err(|e| Error::io("compress", path, e))?;
    encoder
        .finish()
        .and_then(|out| out.sync_all())
        .map_err(|e| Error::io("finish archive", &target, e))?;

    debug!(
        source = %path.display(),
        target = %target.display(),
        size = %format_size(copied),
        "archived"
    );
    Ok(())
}

#[cfg(unix)]
fn create_dirs(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o755).create(dir)
}

#[cfg(not(unix))]
fn create_dirs(dir: &Path) -> io::Result<()> {
    fs::DirBuilder::new().recursive(true).create(dir)
}
