//! Error types for the loading boundary.
//!
//! Loading is the only stage with designed failure paths. Two conditions are
//! distinguished so the caller can print the right message before aborting
//! the run:
//!
//! - [`LoadError::NotFound`]: the input path does not resolve to a file.
//! - [`LoadError::Failed`]: the file exists but could not be read or parsed;
//!   the underlying Polars error is kept as the source.
//!
//! Both are handled inside [`crate::analysis::io::load_dataset`], which
//! downgrades them to an absent result. Nothing downstream of the loader
//! sees these errors; later stages report unexpected defects through
//! `anyhow`.

use polars::error::PolarsError;
use std::fmt;
use std::path::PathBuf;

/// Failure to produce a table from the input path.
#[derive(Debug)]
pub enum LoadError {
    /// The input path does not exist.
    NotFound(PathBuf),

    /// Any other I/O or parsing fault, with its cause.
    Failed { path: PathBuf, source: PolarsError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "file not found: {}", path.display()),
            Self::Failed { path, source } => {
                write!(f, "failed to load {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Failed { source, .. } => Some(source),
        }
    }
}
