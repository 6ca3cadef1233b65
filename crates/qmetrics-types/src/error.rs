//! Fatal input errors.
//!
//! Per-record problems (bad numbers, missing attributes) are never errors:
//! they resolve to documented defaults inside the extractors. Only the
//! absence of a whole input artifact stops a run.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("{artifact} not found at {}", path.display())]
    MissingInput { artifact: String, path: PathBuf },

    #[error("{artifact} at {} is not a regular file", path.display())]
    NotAFile { artifact: String, path: PathBuf },
}

impl PreconditionError {
    /// Path of the artifact that failed the check.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::MissingInput { path, .. } | Self::NotAFile { path, .. } => path,
        }
    }
}
