use crate::error::CollectError;
use crate::options::CollectOptions;
use crate::output::RecordWriter;
use crate::types::{CollectReport, FileEntry, SkippedFile};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Read};
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    /// Depth-first walk of `root`. Inside each directory, files come first and
    /// subdirectories after, both ordered by name. Nothing is filtered out.
    fn new(root: &Path) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_path(|a, b| {
                a.is_dir()
                    .cmp(&b.is_dir())
                    .then_with(|| a.file_name().cmp(&b.file_name()))
            });
        Self {
            inner: builder.build(),
        }
    }
    fn files(self) -> impl Iterator<Item = Result<PathBuf, CollectError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if is_collectable(&entry) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(CollectError::Walk {
                path: walk_error_path(&e).unwrap_or_default(),
                message: e.to_string(),
            })),
        })
    }
}
fn walk_error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        _ => None,
    }
}
// Symlinks are not followed, but one pointing at anything other than a
// directory is read like a file.
fn is_collectable(entry: &ignore::DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}
fn ensure_directory(root: &Path) -> Result<(), CollectError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(CollectError::DirectoryNotFound {
            path: root.to_path_buf(),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(CollectError::DirectoryNotFound {
            path: root.to_path_buf(),
        }),
        Err(e) => Err(CollectError::io(root, e)),
    }
}
fn resolve(path: &Path) -> Result<PathBuf, CollectError> {
    dunce::canonicalize(path).map_err(|e| CollectError::io(path, e))
}
fn read_file_entry(root: &Path, path: &Path, resolved: PathBuf) -> Result<FileEntry, CollectError> {
    let mut file = File::open(path).map_err(|e| CollectError::io(path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| CollectError::io(path, e))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let relative_dir = path
        .parent()
        .and_then(|p| p.strip_prefix(root).ok())
        .map(Path::to_path_buf)
        .unwrap_or_default();
    Ok(FileEntry {
        name,
        relative_dir,
        path: resolved,
        content: String::from_utf8_lossy(&bytes).into_owned(),
    })
}
/// Collects every file under `options.source_directory` into `options.output_path`.
///
/// The output file is created (or truncated) before anything else happens, so it
/// exists even when the run fails. Files that cannot be read and directories that
/// cannot be listed are skipped, logged and listed in [`CollectReport::skipped`].
///
/// When the output file lies inside the source tree it is never collected into
/// itself; this is the only entry ever left out.
///
/// # Errors
///
/// - [`CollectError::DirectoryNotFound`] if the source is missing or not a directory.
/// - [`CollectError::Io`] if the output file cannot be created or written.
pub fn collect(options: &CollectOptions) -> Result<CollectReport, CollectError> {
    let root = options.source_directory.as_path();
    let output = options.output_path.as_path();
    tracing::debug!("Collecting {} into {}", root.display(), output.display());
    let file = File::create(output).map_err(|e| CollectError::io(output, e))?;
    let mut writer = RecordWriter::new(BufWriter::new(file));
    ensure_directory(root)?;
    let output_resolved = dunce::canonicalize(output).ok();
    let mut collected = Vec::new();
    let mut skipped = Vec::new();
    for path in Walker::new(root).files() {
        let path = match path {
            Ok(path) => path,
            Err(CollectError::Walk { path, message }) => {
                tracing::warn!("Failed to list {}: {}", path.display(), message);
                skipped.push(SkippedFile {
                    path,
                    reason: message,
                });
                continue;
            }
            Err(e) => return Err(e),
        };
        let entry = resolve(&path).and_then(|resolved| {
            if output_resolved.as_ref() == Some(&resolved) {
                return Ok(None);
            }
            read_file_entry(root, &path, resolved).map(Some)
        });
        match entry {
            Ok(Some(entry)) => {
                tracing::debug!("Writing record for {}", entry.path.display());
                writer
                    .write_record(&entry)
                    .map_err(|e| CollectError::io(output, e))?;
                collected.push(entry.relative_dir.join(&entry.name));
            }
            Ok(None) => {
                tracing::debug!("Skipping the output file itself: {}", path.display());
            }
            Err(e) => {
                tracing::warn!("Failed to read file {}: {}", path.display(), e);
                skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }
    let records = writer.records_written();
    writer.finish().map_err(|e| CollectError::io(output, e))?;
    tracing::info!(
        "All files from '{}' were collected into '{}'",
        root.display(),
        output.display()
    );
    Ok(CollectReport {
        source_directory: root.to_path_buf(),
        output_path: output.to_path_buf(),
        records,
        collected,
        skipped,
    })
}
/// Runs [`collect`] and reports any failure as a diagnostic instead of returning it.
pub fn collect_to_file(source_directory: impl Into<PathBuf>, output_path: impl Into<PathBuf>) {
    let options = CollectOptions::new(source_directory, output_path);
    match collect(&options) {
        Ok(report) => {
            tracing::debug!(
                "{} records written, {} files skipped",
                report.records,
                report.skipped.len()
            );
        }
        Err(CollectError::DirectoryNotFound { path }) => {
            tracing::error!("Directory not found: '{}'", path.display());
        }
        Err(e) => {
            tracing::error!("Unexpected error: {}", e);
        }
    }
}
