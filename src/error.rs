use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {message}")]
    Walk { path: PathBuf, message: String },
    #[error("Malformed snapshot record #{record}: {reason}")]
    MalformedSnapshot { record: usize, reason: String },
}
impl CollectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CollectError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn malformed(record: usize, reason: impl Into<String>) -> Self {
        CollectError::MalformedSnapshot {
            record,
            reason: reason.into(),
        }
    }
    /// Whether this error means the source directory was missing.
    pub fn is_directory_not_found(&self) -> bool {
        matches!(self, CollectError::DirectoryNotFound { .. })
    }
}
