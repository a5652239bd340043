//! Errors raised while annotating pages and copying stylesheets.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stylesheet handling errors
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("stylesheet `{0}` not found")]
    NotFound(PathBuf),

    #[error("permission denied for `{0}`")]
    PermissionDenied(PathBuf),

    #[error("IO error at `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid frontmatter in `{path}`: {message}")]
    Frontmatter { path: PathBuf, message: String },
}

impl StyleError {
    /// Classify an IO error raised while touching `path`.
    ///
    /// `NotFound` and `PermissionDenied` get their own variants so callers
    /// can match on them without digging through `source()`.
    pub fn from_io(path: impl AsRef<Path>, err: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io { path, source: err },
        }
    }
}

/// Result alias for stylesheet operations
pub type Result<T, E = StyleError> = std::result::Result<T, E>;
