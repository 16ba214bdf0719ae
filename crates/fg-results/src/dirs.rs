//! Output folder handling.

use crate::ResultsResult;
use std::fs;
use std::path::Path;

/// What [`check_make_dir`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}

/// Make sure `path` exists as a directory, creating missing parents.
///
/// Not safe against another process creating the folder between the check and
/// the creation.
pub fn check_make_dir(path: &Path) -> ResultsResult<DirStatus> {
    if path.is_dir() {
        tracing::info!(path = %path.display(), "folder already exists");
        return Ok(DirStatus::AlreadyExists);
    }

    fs::create_dir_all(path)?;
    tracing::info!(path = %path.display(), "created folder");
    Ok(DirStatus::Created)
}
