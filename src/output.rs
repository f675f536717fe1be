//! Record formatting for the collected output file.
//!
//! Every successfully read file becomes one record:
//!
//! ```text
//! Название файла - <file name>
//! полный путь до него - <absolute path>
//! содержимое
//! <file content>
//!
//! ================================================================================
//!
//! ```
//!
//! Records carry no length prefix; readers scan for the header lines and the separator.

use crate::types::FileEntry;
use std::io::{self, Write};

/// Prefix of the first record line, followed by the file name.
pub const FILE_NAME_PREFIX: &str = "Название файла - ";
/// Prefix of the second record line, followed by the absolute path.
pub const FULL_PATH_PREFIX: &str = "полный путь до него - ";
/// Third record line, directly preceding the content.
pub const CONTENT_HEADER: &str = "содержимое";
/// Separator line between records.
pub const SEPARATOR: &str =
    "================================================================================";
/// Everything written after the content of a record.
pub const RECORD_TERMINATOR: &str = concat!(
    "\n\n",
    "================================================================================",
    "\n\n"
);

/// Renders a single record.
pub fn format_record(entry: &FileEntry) -> String {
    let mut out = String::with_capacity(entry.content.len() + 256);
    out.push_str(FILE_NAME_PREFIX);
    out.push_str(&entry.name);
    out.push('\n');
    out.push_str(FULL_PATH_PREFIX);
    out.push_str(&entry.path.display().to_string());
    out.push('\n');
    out.push_str(CONTENT_HEADER);
    out.push('\n');
    out.push_str(&entry.content);
    out.push_str(RECORD_TERMINATOR);
    out
}

/// Appends records to an underlying writer and counts them.
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    inner: W,
    records: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, records: 0 }
    }

    pub fn write_record(&mut self, entry: &FileEntry) -> io::Result<()> {
        self.inner.write_all(format_record(entry).as_bytes())?;
        self.records += 1;
        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.records
    }

    /// Flushes and returns the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
