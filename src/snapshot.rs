//! Reading a collected output file back into its records.

use crate::error::CollectError;
use crate::output::{CONTENT_HEADER, FILE_NAME_PREFIX, FULL_PATH_PREFIX, RECORD_TERMINATOR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One record recovered from an output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub file_name: String,
    pub full_path: PathBuf,
    pub content: String,
}

/// Splits `text` into records.
///
/// Records are delimited by [`RECORD_TERMINATOR`]. A file whose content itself
/// contains the terminator cannot be told apart from two records.
pub fn parse_snapshot(text: &str) -> Result<Vec<SnapshotRecord>, CollectError> {
    text.split_terminator(RECORD_TERMINATOR)
        .enumerate()
        .map(|(index, chunk)| parse_record(index + 1, chunk))
        .collect()
}

/// Reads and parses the output file at `path`.
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Vec<SnapshotRecord>, CollectError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| CollectError::io(path, e))?;
    parse_snapshot(&text)
}

fn parse_record(index: usize, chunk: &str) -> Result<SnapshotRecord, CollectError> {
    let (name_line, rest) = split_line(chunk)
        .ok_or_else(|| CollectError::malformed(index, "missing file name line"))?;
    let file_name = name_line
        .strip_prefix(FILE_NAME_PREFIX)
        .ok_or_else(|| CollectError::malformed(index, "file name header not found"))?;
    let (path_line, rest) =
        split_line(rest).ok_or_else(|| CollectError::malformed(index, "missing path line"))?;
    let full_path = path_line
        .strip_prefix(FULL_PATH_PREFIX)
        .ok_or_else(|| CollectError::malformed(index, "full path header not found"))?;
    let (header, content) =
        split_line(rest).ok_or_else(|| CollectError::malformed(index, "missing content header"))?;
    if header != CONTENT_HEADER {
        return Err(CollectError::malformed(index, "content header not found"));
    }
    Ok(SnapshotRecord {
        file_name: file_name.to_string(),
        full_path: PathBuf::from(full_path),
        content: content.to_string(),
    })
}

fn split_line(s: &str) -> Option<(&str, &str)> {
    s.split_once('\n')
}
