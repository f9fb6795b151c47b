//! Per-file actions: list, delete, archive

mod archive;
mod delete;
mod list;

pub use archive::{archive_file, archive_target};
pub use delete::{DELETED_PREFIX, DeletionLog, delete_file};
pub use list::list_file;
