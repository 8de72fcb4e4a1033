mod article;
pub use article::*;

mod format;
pub use format::*;

mod issue;
pub use issue::*;

mod manifest;
pub use manifest::*;

mod section;
pub use section::*;

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Generate an identifier for a section or article.
///
/// Identifiers end up in file names and cross references, so they are limited
/// to lowercase hex digits.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// The final component of a path, lossily converted to UTF-8.
pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// List the direct children of a directory, sorted by path.
pub(crate) fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = std::fs::read_dir(dir)
        .map_err(Error::io(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(Error::io(dir))?;
    children.sort();
    Ok(children)
}
