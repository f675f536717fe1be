use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file discovered during traversal, with its decoded content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// The file name, without any directory part.
    pub name: String,
    /// The directory containing the file, relative to the source directory.
    ///
    /// Empty for files directly under the source directory.
    pub relative_dir: PathBuf,
    /// The absolute, fully resolved path of the file.
    pub path: PathBuf,
    /// The content of the file.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD`.
    pub content: String,
}

/// A file that could not be read and was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    /// The rendered error.
    pub reason: String,
}

/// Summary of a completed collection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectReport {
    pub source_directory: PathBuf,
    pub output_path: PathBuf,
    /// Number of records written to the output file.
    pub records: usize,
    /// Paths of the collected files relative to the source directory, in output order.
    pub collected: Vec<PathBuf>,
    /// Files that could not be read and directories that could not be listed, in traversal order.
    pub skipped: Vec<SkippedFile>,
}
