use serde::{Deserialize, Serialize};
use std::path::PathBuf;
/// The two parameters of a collection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectOptions {
    /// Directory whose files are collected.
    pub source_directory: PathBuf,
    /// File the records are written to. Truncated at the start of every run.
    pub output_path: PathBuf,
}
impl CollectOptions {
    pub fn new(source_directory: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_directory: source_directory.into(),
            output_path: output_path.into(),
        }
    }
}
